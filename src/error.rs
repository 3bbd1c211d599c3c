use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomkitError {
    #[error("Window error: {0}")]
    Window(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Media query error: {0}")]
    MediaQuery(String),

    #[error("Timer error: {0}")]
    Timer(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<DomkitError> for String {
    fn from(err: DomkitError) -> Self {
        err.to_string()
    }
}
