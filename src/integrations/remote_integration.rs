use crate::errors::StatusError;
use crate::remote_status::RemoteStatus;

pub trait RemoteIntegration {
    /// Asks the remote side for its current status. Fails with
    /// `CannotGetStatus` when the host can't be talked to and `ServerError`
    /// when it answers with something we don't understand.
    fn get_status(&mut self) -> Result<RemoteStatus, StatusError>;
}
