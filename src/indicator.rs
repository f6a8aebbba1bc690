use crate::color::Color;
use crate::config_file::Config;
use crate::errors::StatusError;
use crate::process::run_captured;

/// How long one status pattern should take, roughly one poll.
pub const POLLING_LATENCY_MS: u64 = 5000;
pub const TIMES_TO_BLINK: u64 = 10;
/// Blink pace that makes `TIMES_TO_BLINK` blinks fill the polling latency.
pub const BLINK_DELAY_MS: u64 = POLLING_LATENCY_MS / TIMES_TO_BLINK;

pub trait Indicator {
    /// Blinks `color` with the given pace. Blocks until the pattern is done.
    fn show(&self, color: Color, delay_ms: u64) -> Result<(), StatusError>;
    /// Rapid random colors; the last thing shown before dying.
    fn alarm(&self) -> Result<(), StatusError>;
    fn off(&self) -> Result<(), StatusError>;
}

/// Drives a blink(1) through the external `blink1-tool` CLI.
pub struct Blink1Tool {
    tool: String,
    intensity_scale: f32,
}

impl Blink1Tool {
    pub fn new(tool: &str, intensity_scale: f32) -> Blink1Tool {
        Blink1Tool {
            tool: tool.to_string(),
            intensity_scale: intensity_scale,
        }
    }

    pub fn from_config(config: &Config) -> Blink1Tool {
        Blink1Tool::new(&config.blink_tool, config.intensity_scale)
    }

    /// Fading takes as long as the blink delay; anything shorter looks jagged.
    pub fn blink_args(&self, color: Color, delay_ms: u64) -> Vec<String> {
        let color = color.scaled(self.intensity_scale);
        vec![
            "--rgb".to_string(),
            color.to_string(),
            "--blink".to_string(),
            TIMES_TO_BLINK.to_string(),
            "--delay".to_string(),
            delay_ms.to_string(),
            "-m".to_string(),
            delay_ms.to_string(),
        ]
    }

    pub fn alarm_args() -> Vec<String> {
        vec![
            "-t".to_string(),
            "50".to_string(),
            "--random".to_string(),
            "200".to_string(),
        ]
    }

    pub fn off_args() -> Vec<String> {
        vec!["--off".to_string()]
    }

    fn run(&self, args: &[String]) -> Result<(), StatusError> {
        let output = run_captured(&self.tool, args).map_err(|e| {
            StatusError::blink_error(format!("Failed to run {} {:?}: {}", self.tool, args, e))
        })?;
        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            return Err(StatusError::blink_error(format!(
                "Blink command failed: {}",
                stderr
            )));
        }
        Ok(())
    }
}

impl Indicator for Blink1Tool {
    fn show(&self, color: Color, delay_ms: u64) -> Result<(), StatusError> {
        self.run(&self.blink_args(color, delay_ms))
    }

    fn alarm(&self) -> Result<(), StatusError> {
        self.run(&Blink1Tool::alarm_args())
    }

    fn off(&self) -> Result<(), StatusError> {
        self.run(&Blink1Tool::off_args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(args: &[String], flag: &str) -> usize {
        args.iter().filter(|arg| *arg == flag).count()
    }

    #[test]
    fn default_delay_fills_polling_latency() {
        assert_eq!(BLINK_DELAY_MS, 500);
        assert_eq!(BLINK_DELAY_MS * TIMES_TO_BLINK, POLLING_LATENCY_MS);
    }

    #[test]
    fn every_palette_color_gets_one_complete_command() {
        let tool = Blink1Tool::new("blink1-tool", 1.0);
        for &color in Color::PALETTE.iter() {
            let args = tool.blink_args(color, BLINK_DELAY_MS);
            assert_eq!(count(&args, "--rgb"), 1);
            assert_eq!(count(&args, "--blink"), 1);
            assert_eq!(count(&args, "--delay"), 1);
            assert_eq!(count(&args, "-m"), 1);
            assert_eq!(
                args,
                vec![
                    "--rgb".to_string(),
                    color.to_string(),
                    "--blink".to_string(),
                    "10".to_string(),
                    "--delay".to_string(),
                    "500".to_string(),
                    "-m".to_string(),
                    "500".to_string(),
                ]
            );
        }
    }

    #[test]
    fn fade_time_follows_custom_delay() {
        let args = Blink1Tool::new("blink1-tool", 1.0).blink_args(Color::RED, 25);
        assert_eq!(&args[4..], &["--delay", "25", "-m", "25"]);
    }

    #[test]
    fn intensity_scale_dims_the_color() {
        let args = Blink1Tool::new("blink1-tool", 0.4).blink_args(Color::new(255, 0, 0), 500);
        assert_eq!(args[1], "102,0,0");
    }

    #[test]
    fn alarm_is_rapid_random_blinking() {
        assert_eq!(Blink1Tool::alarm_args(), vec!["-t", "50", "--random", "200"]);
    }

    #[test]
    fn quiet_tool_succeeds() {
        assert_eq!(Blink1Tool::new("true", 1.0).off(), Ok(()));
    }

    #[test]
    fn missing_tool_is_a_blink_error() {
        let tool = Blink1Tool::new("command_that_does_not_exist_12345", 1.0);
        match tool.show(Color::GREEN, 500) {
            Err(StatusError::BlinkError { message }) => {
                assert!(message.contains("command_that_does_not_exist_12345"))
            }
            other => panic!("expected BlinkError, got {:?}", other),
        }
    }

    #[test]
    fn diagnostic_output_is_a_blink_error() {
        let tool = Blink1Tool::new("sh", 1.0);
        let args = vec!["-c".to_string(), "echo 'no blink(1) devices found' >&2".to_string()];
        assert_eq!(
            tool.run(&args),
            Err(StatusError::blink_error(
                "Blink command failed: no blink(1) devices found"
            ))
        );
    }
}
