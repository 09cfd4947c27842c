//! Configuration for the tree walker

/// Configuration for tree walking behavior.
///
/// `dirs_only` and `files_only` are mutually exclusive; the CLI parser
/// rejects the combination before a walker is ever constructed.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include hidden entries (names starting with a dot).
    pub show_hidden: bool,
    /// List directories only.
    pub dirs_only: bool,
    /// List files only.
    pub files_only: bool,
    /// Descend no further than this depth. The root's children are at
    /// depth 0, so `Some(0)` lists only the top level.
    pub max_depth: Option<usize>,
    /// Print the full path instead of the bare entry name.
    pub full_paths: bool,
}
