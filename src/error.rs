use http::StatusCode;

/// Failure of a single HTTP resource operation.
///
/// No retries anywhere: a transport failure or a non-2xx status is returned
/// to the calling controller as-is, and the controller decides how to
/// surface it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection refused, timeout, TLS failure, malformed response body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// A path parameter was rejected before any request was formed.
    #[error("invalid value for path parameter {name:?}: {reason}")]
    InvalidPathParam {
        name: &'static str,
        reason: &'static str,
    },
}

/// Client-side rejection raised by a view controller before any request is
/// issued. Server and transport failures never appear here; controllers
/// convert those into user notifications instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("application settings have not been loaded")]
    SettingsNotLoaded,

    #[error("a settings update is already in progress")]
    SaveInProgress,

    #[error("label filter index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
