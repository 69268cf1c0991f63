use thiserror::Error;

/// Errors surfaced by the showcase core.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A data query named a key with no backing data source.
    #[error("unknown query: {0}")]
    UnknownQuery(String),

    #[error("unknown section anchor: {0}")]
    UnknownAnchor(String),

    #[error("unknown roster category: {0}")]
    UnknownCategory(String),

    #[error("failed to load settings: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("page layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),
}

impl From<figment::Error> for SiteError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
