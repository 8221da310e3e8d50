//! Error type shared by the configurator's domain operations.

/// Everything that can reject a configurator action.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfiguratorError {
    #[error("unknown frame type `{0}`")]
    UnknownFrame(String),
    #[error("no frame type selected")]
    NoFrameSelected,
    #[error("{field} is not a usable size: `{value}`")]
    InvalidDimension { field: &'static str, value: String },
    #[error("cart has no item at index {index} (len {len})")]
    ItemOutOfRange { index: usize, len: usize },
    #[error("cart is empty")]
    EmptyCart,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("malformed configuration: {0}")]
    Config(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ConfiguratorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
