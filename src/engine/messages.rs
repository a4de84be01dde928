use crate::models::SelectionState;

/// A snapshot of the user's selection waiting to be turned into a frame.
#[derive(Debug, Clone)]
pub struct RefreshRequest {
    /// Monotonic; a higher generation always supersedes a lower one
    pub generation: u64,
    pub selection: SelectionState,
}
