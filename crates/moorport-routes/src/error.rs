use thiserror::Error;

/// Errors surfaced by route table verification and programmatic navigation.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    #[error("route {pattern} is unreachable: shadowed by earlier {by}")]
    Shadowed { pattern: String, by: String },

    #[error("no route named {0}")]
    UnknownName(String),

    #[error("missing value for parameter :{param} in {pattern}")]
    MissingParam { param: String, pattern: String },
}

/// Convenience result type for route operations
pub type Result<T> = std::result::Result<T, RouteError>;
