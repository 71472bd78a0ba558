//! Error types for the authorization checker

use thiserror::Error;

/// Stable error codes exposed to callers for comparison.
///
/// These are carried by every core-raised [`AuthzError`] and are part of the
/// public contract; match on them rather than on error messages.
pub mod code {
    /// A referenced role or action has no registered definition.
    pub const MISSING_DEFINITION: &str = "E_MISSINGDEFINITION";

    /// The permission decision was negative.
    pub const NOT_AUTHORIZED: &str = "E_NOTAUTHORIZED";

    /// User extraction yielded no user.
    pub const USER_NOT_FOUND: &str = "E_USERNOTFOUND";
}

/// Authorization errors
#[derive(Debug, Error)]
pub enum AuthzError {
    /// No definition was registered for the named role.
    #[error("no definition supplied for role `{0}`")]
    MissingRole(String),

    /// No definition was registered for the named action.
    #[error("no definition supplied for action `{0}`")]
    MissingAction(String),

    /// A gate's user source yielded no user for the request.
    #[error("user not found")]
    UserNotFound,

    /// A gate's permission decision came back negative.
    #[error("not authorized to `{0}`")]
    NotAuthorized(String),

    /// Failure raised by a caller-supplied role predicate or user source,
    /// passed through unchanged.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl AuthzError {
    /// Stable code for this error, or `None` for upstream failures, which
    /// are propagated verbatim with nothing attached.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::MissingRole(_) | Self::MissingAction(_) => Some(code::MISSING_DEFINITION),
            Self::UserNotFound => Some(code::USER_NOT_FOUND),
            Self::NotAuthorized(_) => Some(code::NOT_AUTHORIZED),
            Self::Upstream(_) => None,
        }
    }
}

/// Result type for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;
