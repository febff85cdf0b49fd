use simplelog::{
    ColorChoice, CombinedLogger, Config as LogConfig, LevelFilter, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::process::ExitCode;
use tilecfg::{Config, check};

/// Lints the shipped configuration before the window manager loads it.
fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            LogConfig::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Info,
            LogConfig::default(),
            File::create("/tmp/tilecfg.log")?,
        ),
    ])?;

    let config = Config::load();
    log::info!(
        "Built config: {} keybinds, {} groups, {} layouts, {} screens",
        config.keys.len(),
        config.groups.len(),
        config.layouts.len(),
        config.screens.len()
    );

    let problems = check::run_all(&config);
    for problem in &problems {
        log::warn!("{}", problem);
    }

    if problems.is_empty() {
        log::info!("Configuration is clean");
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!("{} problem(s) found", problems.len());
        Ok(ExitCode::FAILURE)
    }
}
