use std::path::PathBuf;

/// Represents the final configuration after validating CLI args and
/// deriving the replacement pair.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub recursive: bool,
    pub start_only: bool,
    pub extension: String,
    pub target: PathBuf,
    /// Character run being replaced (a tab, or a run of N spaces).
    pub replace_from: String,
    /// Character run it is replaced with.
    pub replace_to: String,
}
