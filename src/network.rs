use std::time::Duration;

use failure::Error;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::StatusCode;

/// Upper bound for the connectivity check.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

pub trait Connectivity {
    /// True only if the well-known endpoint answered 200. Never fails.
    fn is_online(&self) -> bool;
}

/// Reachability check against a stable public endpoint, used to tell
/// "offline" apart from "online, but the remote host won't talk to us".
pub struct HttpProbe {
    client: Client,
    url: String,
}

impl HttpProbe {
    pub fn new(endpoint: &str) -> Result<HttpProbe, Error> {
        HttpProbe::from_builder(Client::builder(), endpoint)
    }

    fn from_builder(builder: ClientBuilder, endpoint: &str) -> Result<HttpProbe, Error> {
        let client = builder
            .timeout(PROBE_TIMEOUT)
            .connect_timeout(PROBE_TIMEOUT)
            .build()
            .map_err(|e| format_err!("Unable to build HTTP client: {}", e))?;
        Ok(HttpProbe {
            client: client,
            url: with_scheme(endpoint),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Connectivity for HttpProbe {
    fn is_online(&self) -> bool {
        match self.client.get(self.url.as_str()).send() {
            Ok(response) => match response.status() {
                StatusCode::OK => true,
                other_code => {
                    warn!(
                        "--Probe--: GET {} answered with code: {}",
                        self.url, other_code
                    );
                    false
                }
            },
            Err(err) => {
                warn!("--Probe--: GET {} failed: {}", self.url, err);
                false
            }
        }
    }
}

/// Endpoints without a scheme are assumed to be plain HTTP.
fn with_scheme(endpoint: &str) -> String {
    if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    }
}
