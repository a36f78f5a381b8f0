//! Buffer usage hints.

/// How often the contents of a vertex or index buffer are expected to change.
///
/// This is only a hint passed through to the backend; nothing in this crate
/// behaves differently depending on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Usage {
    /// Rewritten every frame (`"stream"`).
    Stream,
    /// Updated occasionally (`"dynamic"`).
    #[default]
    Dynamic,
    /// Written once (`"static"`).
    Static,
}
