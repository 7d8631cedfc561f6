use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Config deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Markup write failed")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
