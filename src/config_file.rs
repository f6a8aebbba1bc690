use std::fs;
use std::io;
use std::path::Path;

use failure::Error;

use crate::integrations::StatusFormat;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Host the status command runs on, anything ssh accepts.
    pub host: String,
    pub status_command: String,
    pub status_format: StatusFormat,
    pub ssh_tool: String,

    pub blink_tool: String,
    /// Dims every status color, 1.0 is full brightness.
    pub intensity_scale: f32,

    pub stable_public_host: String,

    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            host: "henrik.mtv".to_string(),
            status_command: "./status".to_string(),
            status_format: StatusFormat::Json,
            ssh_tool: "ssh".to_string(),
            blink_tool: "./blink1-tool".to_string(),
            intensity_scale: 1.0,
            stable_public_host: "http://www.google.com".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| format_err!("Unable to parse config file: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to the defaults when there is no such file.
    pub fn load(path: &Path) -> Result<Config, Error> {
        match fs::read_to_string(path) {
            Ok(contents) => Config::from_toml(&contents),
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(format_err!("Unable to read config file {:?}: {}", path, e)),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        let required = [
            ("host", &self.host),
            ("status_command", &self.status_command),
            ("ssh_tool", &self.ssh_tool),
            ("blink_tool", &self.blink_tool),
            ("stable_public_host", &self.stable_public_host),
        ];
        for &(name, value) in required.iter() {
            if value.trim().is_empty() {
                return Err(format_err!("Config value '{}' must not be empty", name));
            }
        }

        if !(self.intensity_scale >= 0.0 && self.intensity_scale <= 1.0) {
            return Err(format_err!(
                "Config value 'intensity_scale' must be between 0.0 and 1.0, got {}",
                self.intensity_scale
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn empty_file_means_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.host, "henrik.mtv");
        assert_eq!(config.status_command, "./status");
        assert_eq!(config.status_format, StatusFormat::Json);
        assert_eq!(config.stable_public_host, "http://www.google.com");
        assert_eq!(config.intensity_scale, 1.0);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_toml(
            r#"
            host = "bork.i"
            status_format = "keyword"
            intensity_scale = 0.4
            log_file = "blink.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "bork.i");
        assert_eq!(config.status_format, StatusFormat::Keyword);
        assert_eq!(config.intensity_scale, 0.4);
        assert_eq!(config.log_file, Some("blink.log".to_string()));
        assert_eq!(config.blink_tool, "./blink1-tool");
    }

    #[test]
    fn empty_host_is_rejected() {
        let err = Config::from_toml(r#"host = """#).unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn out_of_range_scale_is_rejected() {
        assert!(Config::from_toml("intensity_scale = 1.5").is_err());
        assert!(Config::from_toml("intensity_scale = -0.1").is_err());
    }

    #[test]
    fn unknown_keys_and_formats_are_rejected() {
        assert!(Config::from_toml(r#"hots = "typo""#).is_err());
        assert!(Config::from_toml(r#"status_format = "xml""#).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "status_command = \"~/bin/build-status\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.status_command, "~/bin/build-status");
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.ssh_tool, "ssh");
    }

    #[test]
    fn shipped_config_is_valid() {
        let config = Config::from_toml(include_str!("config.toml")).unwrap();
        assert_eq!(config.status_format, StatusFormat::Json);
    }
}
