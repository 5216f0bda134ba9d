use lexi_core::dictionary::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to load dictionary: {0}")]
    Load(#[from] LoadError),

    #[error("No raw source available for the {0} dictionary")]
    SourceUnavailable(&'static str),

    #[error("Build lock poisoned for the {0} dictionary")]
    Poisoned(&'static str),
}
