/// Print the built-in document so it can be copied and edited.
pub fn run() {
    print!("{}", crate::content::BUILTIN);
}
