use excavar_shapes::UnknownShape;

#[derive(Debug, thiserror::Error)]
pub enum ExcavarError {
    #[error(transparent)]
    UnknownShape(#[from] UnknownShape),

    #[error("cells can only be removed from the authoritative (server) side")]
    IllegitimateContext,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
