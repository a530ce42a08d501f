use std::fmt;
use std::process::ExitCode;

/// How a probe ended.
///
/// Each status owns a distinct process exit code, see [`Status::exit_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Transfer completed and a content type was reported.
    Success,

    /// Transfer completed but no usable content type was available.
    NoContentType,

    /// The transfer itself did not complete.
    ///
    /// Covers DNS and connection failures, TLS handshake errors, timeouts
    /// when configured, and URLs the transport refuses.
    TransferFailed,

    /// The client session could not be constructed. No request was sent.
    InitFailed,
}

impl Status {
    /// Process exit code for this status.
    pub const fn exit_code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::NoContentType => 1,
            Status::TransferFailed => 2,
            Status::InitFailed => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::NoContentType => write!(f, "no-content-type"),
            Status::TransferFailed => write!(f, "transfer-failed"),
            Status::InitFailed => write!(f, "init-failed"),
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self { ExitCode::from(status.exit_code()) }
}

/// Result of one probe.
///
/// A content type is attached if and only if the status is
/// [`Status::Success`], and it is never empty. The constructors are the only
/// way to build an outcome, so the pairing cannot drift.
///
/// `Display` renders the single line the CLI prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    status: Status,
    content_type: Option<String>,
}

impl RequestOutcome {
    /// Successful probe carrying the received content type.
    ///
    /// A blank value degrades to [`RequestOutcome::no_content_type`].
    pub fn success(content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        if content_type.trim().is_empty() {
            return Self::no_content_type();
        }
        Self {
            status: Status::Success,
            content_type: Some(content_type),
        }
    }

    /// Transfer completed without a usable content type.
    pub const fn no_content_type() -> Self {
        Self {
            status: Status::NoContentType,
            content_type: None,
        }
    }

    /// The transfer did not complete.
    pub const fn transfer_failed() -> Self {
        Self {
            status: Status::TransferFailed,
            content_type: None,
        }
    }

    /// No session could be opened.
    pub const fn init_failed() -> Self {
        Self {
            status: Status::InitFailed,
            content_type: None,
        }
    }

    /// How the probe ended.
    pub const fn status(&self) -> Status { self.status }

    /// Received content type, present only on success.
    pub fn content_type(&self) -> Option<&str> { self.content_type.as_deref() }

    /// Process exit code for this outcome.
    pub const fn exit_code(&self) -> u8 { self.status.exit_code() }

    /// Whether a content type was received.
    pub const fn is_success(&self) -> bool { matches!(self.status, Status::Success) }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.content_type.as_deref()) {
            (Status::Success, Some(content_type)) => {
                write!(f, "We received Content-Type: {content_type}")
            }
            (Status::Success | Status::NoContentType, _) => write!(f, "No content-type"),
            (Status::TransferFailed, _) => write!(f, "Request failed"),
            (Status::InitFailed, _) => write!(f, "Failed to init curl"),
        }
    }
}
