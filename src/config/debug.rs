//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Anything about handling the SelectionState (toggles, rejected edits)
    pub log_selection: bool,

    /// Frame rebuilds in the engine
    pub log_engine_core: bool,

    /// Per-dataset load outcomes
    pub log_loader: bool,

    pub log_clusters: bool,

    pub log_rebase: bool,

    /// Persisted preferences on startup and save
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_selection: true,
    log_loader: true,

    log_engine_core: false,
    log_clusters: false,
    log_rebase: false,
    log_persistence: false,
};
