//! The portfolio document: page sections, outbound links and the slide deck.
//!
//! Content is plain data. It is loaded once at startup (from a YAML/JSON file
//! or the built-in document) and handed to the page and the viewer; nothing
//! here knows how it is drawn.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// The document shipped with the binary, used when no file is given.
pub const BUILTIN: &str = include_str!("../../content/portfolio.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(default)]
    pub sections: Vec<Section>,

    /// Outbound links shown next to the section pills.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(default)]
    pub presentation: PresentationContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,

    /// Text of the navigation pill.
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Collapsible extra content behind a show/hide button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Block>>,

    /// This section hosts the presentation viewer.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub presentation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationContent {
    #[serde(default)]
    pub slides: Vec<Slide>,

    #[serde(default)]
    pub controls: Controls,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub content: Vec<Block>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            content: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Heading { text: String },
    Paragraph { text: String },
    List { items: Vec<ListItem> },
    Cards { items: Vec<Card> },
    Timeline { entries: Vec<TimelineEntry> },
    Callout { text: String },
    Columns { columns: Vec<Vec<Block>> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub text: String,
}

/// Which viewer control surfaces exist. A missing surface disables only the
/// behavior tied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    #[serde(default = "present")]
    pub track: bool,
    #[serde(default = "present")]
    pub counter: bool,
    #[serde(default = "present")]
    pub previous: bool,
    #[serde(default = "present")]
    pub next: bool,
    #[serde(default = "present")]
    pub fullscreen: bool,
    /// The region presented when fullscreen is requested.
    #[serde(default = "present")]
    pub root: bool,
}

fn present() -> bool {
    true
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            track: true,
            counter: true,
            previous: true,
            next: true,
            fullscreen: true,
            root: true,
        }
    }
}

impl Controls {
    pub fn none() -> Self {
        Self {
            track: false,
            counter: false,
            previous: false,
            next: false,
            fullscreen: false,
            root: false,
        }
    }
}

impl Portfolio {
    /// The section that hosts the viewer, if any.
    pub fn presentation_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.presentation)
    }
}

pub fn builtin() -> Result<Portfolio> {
    from_yaml(BUILTIN)
}

/// Load a document from disk, picking the format from the file extension.
pub fn load(path: &Path) -> Result<Portfolio> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_str() {
        "yaml" | "yml" => from_yaml(&contents),
        "json" => from_json(&contents),
        other => Err(ContentError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            format!(".{other}")
        })),
    }
}

pub fn from_yaml(contents: &str) -> Result<Portfolio> {
    let portfolio: Portfolio = serde_yaml::from_str(contents)?;
    validate(&portfolio)?;
    Ok(portfolio)
}

pub fn from_json(contents: &str) -> Result<Portfolio> {
    let portfolio: Portfolio = serde_json::from_str(contents)?;
    validate(&portfolio)?;
    Ok(portfolio)
}

fn validate(portfolio: &Portfolio) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, section) in portfolio.sections.iter().enumerate() {
        if section.id.trim().is_empty() {
            return Err(ContentError::EmptySectionId { index });
        }
        if !seen.insert(section.id.as_str()) {
            return Err(ContentError::DuplicateSectionId(section.id.clone()));
        }
    }
    if portfolio.sections.iter().filter(|s| s.presentation).count() > 1 {
        tracing::warn!("More than one section hosts the presentation; using the first");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let portfolio = builtin().expect("built-in document should parse");
        assert!(!portfolio.sections.is_empty());
        assert!(
            portfolio.presentation.slides.len() >= 8,
            "Expected at least 8 slides, got {}",
            portfolio.presentation.slides.len()
        );
        assert!(portfolio.presentation_section().is_some());
        assert_eq!(portfolio.presentation.controls, Controls::default());
    }

    #[test]
    fn test_builtin_first_slide_has_subtitle() {
        let portfolio = builtin().unwrap();
        let first = &portfolio.presentation.slides[0];
        assert!(first.subtitle.is_some());
        assert!(portfolio.presentation.slides[1].subtitle.is_none());
    }

    #[test]
    fn test_block_tags() {
        let yaml = r#"
title: Test
presentation:
  slides:
    - title: One
      content:
        - type: paragraph
          text: Hello
        - type: list
          items:
            - label: Name
              text: Someone
            - text: Plain
        - type: columns
          columns:
            - - type: heading
                text: Left
            - - type: callout
                text: Right
"#;
        let portfolio = from_yaml(yaml).unwrap();
        let content = &portfolio.presentation.slides[0].content;
        assert_eq!(content.len(), 3);
        assert!(matches!(content[0], Block::Paragraph { .. }));
        match &content[1] {
            Block::List { items } => {
                assert_eq!(items[0].label.as_deref(), Some("Name"));
                assert!(items[1].label.is_none());
            }
            other => panic!("Expected list, got {other:?}"),
        }
        match &content[2] {
            Block::Columns { columns } => assert_eq!(columns.len(), 2),
            other => panic!("Expected columns, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_controls_default_to_present() {
        let yaml = "title: Test\npresentation:\n  controls:\n    counter: false\n";
        let portfolio = from_yaml(yaml).unwrap();
        let controls = portfolio.presentation.controls;
        assert!(!controls.counter);
        assert!(controls.previous && controls.next && controls.track && controls.root);
        assert!(portfolio.presentation.slides.is_empty());
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let yaml =
            "title: T\nsections:\n  - id: about\n    label: A\n  - id: about\n    label: B\n";
        let err = from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSectionId(ref id) if id == "about"));
    }

    #[test]
    fn test_empty_section_id_rejected() {
        let yaml = "title: T\nsections:\n  - id: ' '\n    label: A\n";
        let err = from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ContentError::EmptySectionId { index: 0 }));
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(
            &path,
            r#"{"title":"J","presentation":{"slides":[{"title":"Only"}]}}"#,
        )
        .unwrap();
        let portfolio = load(&path).unwrap();
        assert_eq!(portfolio.presentation.slides, vec![Slide::new("Only")]);
    }

    #[test]
    fn test_load_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(&path, "title = 'x'").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(ref ext) if ext == ".toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
