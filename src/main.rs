use std::path::PathBuf;

use anyhow::{Context, Result};

use param_strip::prelude::*;

fn main() -> Result<()> {
    let argument_matches = get_configuration_file_option()?;

    let verbosity = get_verbosity(&argument_matches);
    let log_file = get_log_file(&argument_matches)?;
    init_logger(verbosity, &log_file)?;

    let config_path = argument_matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .context("Configuration file option not found")?;

    let options = RunOptions {
        config_path,
        dry_run: argument_matches.get_flag("dry"),
    };

    run(options)?;

    Ok(())
}
