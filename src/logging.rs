//! Logger setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Default log4rs configuration file, looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {M} - {m}{n}";

/// Initialise log4rs from `config_file`, or log to stderr at info if it can't be loaded.
///
/// Stdout is kept free for progress output either way.
pub fn init(config_file: &str) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(config_file, Default::default()) {
        Ok(()) => Ok(()),
        Err(e) => {
            init_stderr(LevelFilter::Info)?;
            log::warn!("Could not load {config_file} ({e}), logging to stderr");
            Ok(())
        }
    }
}

fn init_stderr(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
