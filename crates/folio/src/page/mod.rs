//! Page behavior around the viewer: navigation pills, the mobile menu,
//! reveal-on-scroll and collapsible details. Each piece is plain state
//! updated by the app from egui input.

pub mod details;
pub mod menu;
pub mod nav;
pub mod reveal;
