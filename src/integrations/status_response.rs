use crate::color::Color;
use crate::errors::StatusError;
use crate::indicator::BLINK_DELAY_MS;
use crate::remote_status::RemoteStatus;

/// How the remote status command reports its status.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFormat {
    /// `[[r, g, b], delay_ms]`
    Json,
    /// Free text containing one of `green`, `red`, `black` or `grey`.
    Keyword,
}

/// Payload of the structured status command. A `null` delay means "use the
/// default"; fractional delays are rounded to whole milliseconds.
#[derive(Deserialize)]
pub struct ServerStatusResponse(pub Color, pub Option<f64>);

// Checked in order, first hit wins.
const BUILD_KEYWORDS: [(&str, RemoteStatus); 4] = [
    ("green", RemoteStatus::BuildGreen),
    ("red", RemoteStatus::BuildRed),
    ("black", RemoteStatus::BuildBlack),
    ("grey", RemoteStatus::BuildGrey),
];

pub fn parse_status(output: &str, format: StatusFormat) -> Result<RemoteStatus, StatusError> {
    match format {
        StatusFormat::Json => parse_json_status(output),
        StatusFormat::Keyword => parse_keyword_status(output),
    }
}

fn parse_json_status(output: &str) -> Result<RemoteStatus, StatusError> {
    match serde_json::from_str::<ServerStatusResponse>(output) {
        Ok(ServerStatusResponse(color, delay)) => {
            let delay_ms = match delay {
                None => BLINK_DELAY_MS,
                Some(delay) if delay.is_finite() && delay >= 0.0 => delay.round() as u64,
                Some(delay) => {
                    warn!("--SSH--: Invalid blink delay in status payload: {}", delay);
                    return Err(unexpected_response(output));
                }
            };
            Ok(RemoteStatus::ServerSpecified { color, delay_ms })
        }
        Err(e) => {
            warn!("--SSH--: Could not decode status payload: {}", e);
            Err(unexpected_response(output))
        }
    }
}

fn parse_keyword_status(output: &str) -> Result<RemoteStatus, StatusError> {
    let lowered = output.to_lowercase();
    BUILD_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, status)| status)
        .ok_or_else(|| unexpected_response(output))
}

fn unexpected_response(output: &str) -> StatusError {
    StatusError::server_error(format!("Unexpected response: {}", output.trim()))
}
