//! File logging.
//!
//! The terminal belongs to the UI, so log records go to a file. A
//! `config/log4rs.yaml` next to the settings overrides the built-in setup.

use std::path::Path;

use anyhow::{Context, Result};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::Settings;

const LOG4RS_CONFIG: &str = "config/log4rs.yaml";
const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

pub fn init(root: &Path, settings: &Settings) -> Result<()> {
    let yaml = root.join(LOG4RS_CONFIG);
    if yaml.exists() {
        log4rs::init_file(&yaml, Default::default())
            .with_context(|| format!("failed to load logging config: {}", yaml.display()))?;
        return Ok(());
    }

    let log_path = root.join(&settings.log_file);
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&log_path)
        .with_context(|| format!("failed to open log file: {}", log_path.display()))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(
            Root::builder()
                .appender("file")
                .build(settings.level_filter()?),
        )
        .context("invalid logging config")?;
    log4rs::init_config(config).context("failed to install logger")?;
    Ok(())
}
