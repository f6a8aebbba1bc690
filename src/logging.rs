use failure::Error;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config_file::Config;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {m}{n}";

pub fn init_logging(config: &Config) -> Result<(), Error> {
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .map_err(|_| format_err!("Unknown log level: {}", config.log_level))?;

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let mut builder =
        LogConfig::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if let Some(ref path) = config.log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .map_err(|e| format_err!("Unable to open log file {}: {}", path, e))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder
        .build(root.build(level))
        .map_err(|e| format_err!("Invalid logging configuration: {}", e))?;
    log4rs::init_config(log_config).map_err(|e| format_err!("Unable to start logging: {}", e))?;
    Ok(())
}
