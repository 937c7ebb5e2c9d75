use thiserror::Error;

/// Startup configuration failures. Raised before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Remote collaborator answered, but not with something usable.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{service} API error ({status}): {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} returned an empty response")]
    EmptyResponse { service: &'static str },
}
