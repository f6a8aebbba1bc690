use crate::config_file::Config;
use crate::errors::StatusError;
use crate::integrations::status_response::{parse_status, StatusFormat};
use crate::integrations::RemoteIntegration;
use crate::process::run_captured;
use crate::remote_status::RemoteStatus;

const UNRESOLVED_HOST_MARKER: &str = "could not resolve hostname";
// ssh's own wording for failed connects and rejected keys. The same phrases
// from the remote command itself must not match.
const SSH_CONNECT_PREFIX: &str = "ssh: connect to host";
const SSH_AUTH_MARKER: &str = "permission denied (publickey";

/// Fetches status by running a command on a remote host over ssh. Password
/// authentication is disabled so a missing key fails instead of prompting.
pub struct SshIntegration {
    ssh_tool: String,
    host: String,
    command: String,
    format: StatusFormat,
}

impl SshIntegration {
    pub fn new(ssh_tool: &str, host: &str, command: &str, format: StatusFormat) -> SshIntegration {
        SshIntegration {
            ssh_tool: ssh_tool.to_string(),
            host: host.to_string(),
            command: command.to_string(),
            format: format,
        }
    }

    pub fn from_config(config: &Config) -> SshIntegration {
        SshIntegration::new(
            &config.ssh_tool,
            &config.host,
            &config.status_command,
            config.status_format,
        )
    }

    fn ssh_args(&self) -> Vec<String> {
        vec![
            "-qo".to_string(),
            "PasswordAuthentication=no".to_string(),
            self.host.clone(),
            self.command.clone(),
        ]
    }

    fn run_on_host(&self) -> Result<String, StatusError> {
        let output = run_captured(&self.ssh_tool, &self.ssh_args()).map_err(|e| {
            StatusError::server_error(format!("Failed to run {}: {}", self.ssh_tool, e))
        })?;

        let stdout = output.stdout.to_lowercase();
        let stderr = output.stderr.to_lowercase();
        debug!("--SSH--: [{}] exited with {}", self.host, output.status);
        debug!("--SSH--: [{}] out: {}", self.host, stdout.trim_end());
        debug!("--SSH--: [{}] err: {}", self.host, stderr.trim_end());
        classify_output(stdout, stderr)
    }
}

impl RemoteIntegration for SshIntegration {
    fn get_status(&mut self) -> Result<RemoteStatus, StatusError> {
        let output = self.run_on_host()?;
        parse_status(&output, self.format)
    }
}

/// Decides whether a finished ssh call produced usable output. Expects
/// lowercased text.
pub fn classify_output(stdout: String, stderr: String) -> Result<String, StatusError> {
    let stderr = stderr.trim();
    if never_reached_remote(stderr) {
        warn!("--SSH--: Remote host unreachable: {}", stderr);
        return Err(StatusError::cannot_get_status(stderr));
    }

    if !stderr.is_empty() {
        warn!("--SSH--: Remote command failed: {}", stderr);
        return Err(StatusError::server_error(stderr));
    }

    if stdout.trim().is_empty() {
        warn!("--SSH--: Empty output from remote command");
        return Err(StatusError::cannot_get_status(
            "Empty output from remote command",
        ));
    }

    Ok(stdout)
}

/// True when ssh itself gave up before the remote command ran.
fn never_reached_remote(stderr: &str) -> bool {
    stderr.contains(UNRESOLVED_HOST_MARKER)
        || stderr.lines().map(str::trim).any(|line| {
            line.starts_with(SSH_CONNECT_PREFIX) || line.contains(SSH_AUTH_MARKER)
        })
}
