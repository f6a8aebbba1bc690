use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// What a finished child process wrote, decoded lossily.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `program` to completion, draining both pipes before returning so a
/// chatty child can never block on a full buffer.
pub fn run_captured(program: &str, args: &[String]) -> io::Result<CapturedOutput> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()?;

    Ok(CapturedOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
