use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElbformError {
    #[error(transparent)]
    Fetch(#[from] crate::providers::FetchError),

    #[error(transparent)]
    Normalize(#[from] crate::resource::NormalizeError),

    #[error("malformed tfstate base: {0}")]
    MalformedBaseSnapshot(#[source] serde_json::Error),

    #[error("duplicate load balancer name: {0}")]
    DuplicateName(String),

    #[error("failed to render tfstate: {0}")]
    Render(#[from] crate::terraform::StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
