use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::StatusError;
use crate::indicator::Indicator;
use crate::integrations::RemoteIntegration;
use crate::network::Connectivity;
use crate::remote_status::RemoteStatus;
use crate::state_machine::next_status;

/// Updates and shows the status until `running` is cleared or something
/// fatal happens. A fatal update error sets off the alarm before it is
/// returned; a failure to show a status is returned as is.
pub fn poll<I, C, D>(
    integration: &mut I,
    connectivity: &C,
    indicator: &D,
    running: &AtomicBool,
) -> Result<(), StatusError>
where
    I: RemoteIntegration + ?Sized,
    C: Connectivity + ?Sized,
    D: Indicator + ?Sized,
{
    let mut status = RemoteStatus::Unknown;
    while running.load(Ordering::SeqCst) {
        status = match next_status(status, integration, connectivity) {
            Ok(next) => next,
            Err(err) => {
                error!("--Poll--: Unrecoverable error: {}", err);
                if let Err(alarm_err) = indicator.alarm() {
                    error!("--Poll--: Could not raise the alarm either: {}", alarm_err);
                }
                return Err(err);
            }
        };
        info!("--Poll--: Status: {}", status);

        // Blocks for roughly the polling latency.
        indicator.show(status.color(), status.delay_ms())?;
    }

    info!("--Poll--: Shutting down, turning the light off.");
    indicator.off()
}
