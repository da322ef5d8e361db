use thiserror::Error;

#[derive(Error, Debug)]
pub enum GantryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("usage error: {0}")]
    Usage(String),

    #[error("role '{0}' doesn't exist")]
    RoleNotFound(String),

    #[error("more than one role matches the given name '{role}'. Pick an id from {ids:?}")]
    AmbiguousRole { role: String, ids: Vec<String> },

    #[error("config error: {0}")]
    Config(String),

    #[error("management API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GantryError>;
