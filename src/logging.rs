//! Console logger setup.
//!
//! Benchmark results are printed to stdout by the driver; everything else
//! (progress, warnings, algorithm failures) goes through the `log` facade so
//! it can be filtered or silenced without touching the results stream.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::{Result, SortBenchError};

/// Initialize a stderr console logger at the given level. Call once at
/// startup.
pub fn init(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l:<5} {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| SortBenchError::Logging(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| SortBenchError::Logging(e.to_string()))?;
    Ok(())
}
