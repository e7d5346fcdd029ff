pub mod kind;

/// A general parsing error. Parsing errors are always fatal to the parse call; no partial tree
/// is returned alongside them.
pub use deriv_error::Error;
