//! Logging setup.
//!
//! Wires the `log` facade to a fern dispatch: timestamped records to a
//! file when configured, stderr otherwise. A no-op when logging is
//! disabled.

use anyhow::Result;

use crate::config::LoggingConfig;

/// Initialize the global logger from configuration.
///
/// Call at most once per process; a second call returns an error from the
/// log facade.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply()?;
    Ok(())
}
