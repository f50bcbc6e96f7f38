use crate::error::TransportError;
use crate::metrics::FailureKind;

/// Classified result of one request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success { status: u16 },
    FailureStatus { status: u16 },
    FailureError(TransportError),
}

#[must_use]
pub const fn is_success_status(status: u16) -> bool {
    matches!(status, 200..=299)
}

impl RequestOutcome {
    #[must_use]
    pub fn classify(result: Result<u16, TransportError>) -> Self {
        match result {
            Ok(status) if is_success_status(status) => RequestOutcome::Success { status },
            Ok(status) => RequestOutcome::FailureStatus { status },
            Err(err) => RequestOutcome::FailureError(err),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success { .. })
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            RequestOutcome::Success { status } | RequestOutcome::FailureStatus { status } => {
                Some(*status)
            }
            RequestOutcome::FailureError(_) => None,
        }
    }

    /// `None` for successes.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            RequestOutcome::Success { .. } => None,
            RequestOutcome::FailureStatus { .. } => Some(FailureKind::Status),
            RequestOutcome::FailureError(_) => Some(FailureKind::Transport),
        }
    }
}
