use simplelog::{Config, LevelFilter, WriteLogger};
use std::{error::Error, fs::File, path::PathBuf};

fn log_path(log_filename: &str) -> Result<PathBuf, Box<dyn Error>> {
    Ok(std::env::current_exe()?
        .parent()
        .ok_or("executable has no parent directory")?
        .join(log_filename))
}

/// Logs warnings to `log_filename` next to the executable, debug builds also
/// log info to the terminal.
pub fn setup_loggers(log_filename: &str) -> Result<(), Box<dyn Error>> {
    let file = File::create(log_path(log_filename)?)?;

    #[cfg(debug_assertions)]
    {
        use simplelog::{CombinedLogger, SimpleLogger};
        CombinedLogger::init(vec![
            SimpleLogger::new(LevelFilter::Info, Config::default()),
            WriteLogger::new(LevelFilter::Warn, Config::default(), file),
        ])?;
    }

    #[cfg(not(debug_assertions))]
    WriteLogger::init(LevelFilter::Warn, Config::default(), file)?;

    Ok(())
}
