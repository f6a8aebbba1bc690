use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum StatusError {
    /// The remote host could not be reached or produced nothing to read.
    #[fail(display = "Unable to get status from the remote host: {}", reason)]
    CannotGetStatus { reason: String },

    #[fail(display = "Remote status command failed: {}", message)]
    ServerError { message: String },

    #[fail(display = "Blink tool failed: {}", message)]
    BlinkError { message: String },
}

impl StatusError {
    pub fn cannot_get_status<S: Into<String>>(reason: S) -> StatusError {
        StatusError::CannotGetStatus {
            reason: reason.into(),
        }
    }

    pub fn server_error<S: Into<String>>(message: S) -> StatusError {
        StatusError::ServerError {
            message: message.into(),
        }
    }

    pub fn blink_error<S: Into<String>>(message: S) -> StatusError {
        StatusError::BlinkError {
            message: message.into(),
        }
    }

    /// Only a failed fetch is absorbed by the state machine. Everything else
    /// ends the poll loop.
    pub fn is_recoverable(&self) -> bool {
        match *self {
            StatusError::CannotGetStatus { .. } => true,
            StatusError::ServerError { .. } | StatusError::BlinkError { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_cannot_get_status_is_recoverable() {
        assert!(StatusError::cannot_get_status("offline").is_recoverable());
        assert!(!StatusError::server_error("garbage").is_recoverable());
        assert!(!StatusError::blink_error("no device").is_recoverable());
    }

    #[test]
    fn display_includes_offending_text() {
        let err = StatusError::server_error("Unexpected response: hello");
        assert_eq!(
            err.to_string(),
            "Remote status command failed: Unexpected response: hello"
        );
    }
}
