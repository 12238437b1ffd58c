use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while talking to the API.
#[derive(Debug, Error)]
pub enum Error {
    /// The auth endpoint rejected the login and password combination.
    #[error("invalid login and password combination")]
    InvalidCredentials,

    /// The operation needs a logged in session and none is held.
    #[error("you must be logged in to use this feature")]
    NotAuthenticated,

    /// The HTTP transport failed before a response could be decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    ///
    /// Remote error payloads (rate limits, search time exceeded) are
    /// passed through here with the original body attached.
    #[error("unexpected status {status}")]
    Status {
        /// Status code of the response.
        status: StatusCode,
        /// Raw response body, useful for inspecting remote error payloads.
        body: String,
    },

    /// The access token returned by the auth endpoint could not be decoded.
    #[error("malformed access token: {0}")]
    Token(String),

    /// No submission with the requested id exists.
    #[error("submission {0} was not found")]
    NotFound(u64),
}
