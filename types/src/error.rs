use serde::{Deserialize, Serialize};

/// A serializable error for client rendering.
///
/// Every failure in the system is one of these three kinds, and none of them
/// is fatal to the process: each degrades to a visible message and a
/// retry-by-user-action path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// Bad credentials. Recovered locally; the login form stays usable.
    AuthenticationFailure,
    /// An update or delete referenced an id that does not exist.
    NotFound { what: String, id: String },
    /// A data fetch or action was rejected; callers keep their last-known
    /// or empty state.
    LoadFailure { message: String },
}

impl Error {
    pub fn not_found(what: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            what: what.into(),
            id: id.to_string(),
        }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::LoadFailure {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AuthenticationFailure => write!(f, "invalid email or password"),
            Error::NotFound { what, id } => write!(f, "{what} {id} not found"),
            Error::LoadFailure { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::LoadFailure {
            message: error.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
