//! The errors returned by the client and the lookup seam

/// Message shown when the service could not be reached or did not explain
/// why the lookup failed.
pub const FALLBACK_MESSAGE: &str = "Failed to lookup IP";
/// Message shown when a failure carries no text of its own.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// All the possible errors returned by a lookup.
///
/// The `Display` implementation is the line shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service could not be reached or the transfer failed.
    #[error("{}", FALLBACK_MESSAGE)]
    Transport(#[from] reqwest::Error),
    /// A successful response didn't have the expected shape.
    #[error("{}", FALLBACK_MESSAGE)]
    MalformedResponse(String),
    /// Server side error, properly handled, returning a status and a message.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// Server side error without a usable explanation.
    #[error("{}", FALLBACK_MESSAGE)]
    Rejected { status: u16 },
    /// Any other failure raised by a [`Lookup`](crate::prelude::Lookup) implementation.
    #[error("{}", unexpected_message(.0))]
    Unexpected(Option<String>),
}

fn unexpected_message(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or(UNEXPECTED_MESSAGE)
}

impl Error {
    /// The http status returned by the service, when it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } | Self::Rejected { status } => Some(*status),
            Self::Transport(err) => err.status().map(|code| code.as_u16()),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
