use crate::errors::StatusError;
use crate::integrations::RemoteIntegration;
use crate::network::Connectivity;
use crate::remote_status::RemoteStatus;

/// Computes the status for the next tick.
///
/// While offline (or not yet known) we only probe the stable public host and
/// never bother the remote one. Once online, every tick asks the remote host.
/// A fetch that can't reach it drops back to `Online` rather than `Offline`,
/// so builds degrade to "online, status unknown" first; the probe is what
/// declares us offline. Errors that aren't recoverable are handed back.
pub fn next_status<I, C>(
    current: RemoteStatus,
    integration: &mut I,
    connectivity: &C,
) -> Result<RemoteStatus, StatusError>
where
    I: RemoteIntegration + ?Sized,
    C: Connectivity + ?Sized,
{
    if !current.is_online() {
        return Ok(if connectivity.is_online() {
            RemoteStatus::Online
        } else {
            RemoteStatus::Offline
        });
    }

    match integration.get_status() {
        Ok(status) => Ok(status),
        Err(ref err) if err.is_recoverable() => {
            info!("--State--: {}. Falling back to online.", err);
            Ok(RemoteStatus::Online)
        }
        Err(err) => Err(err),
    }
}
