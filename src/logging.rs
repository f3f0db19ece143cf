//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Load `log4rs.yml` from the working directory, or log `info` to stderr when
/// there is none.
pub fn init() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
    } else {
        init_stderr(LevelFilter::Info)?;
        log::debug!("{LOG_CONFIG_FILE} not found, logging to stderr");
    }
    Ok(())
}

fn init_stderr(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:<5})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
