pub use cli::*;
pub use config::{Config, StripRule};
pub use errors::*;
pub use stripper::{Outcome, StripPattern, completion_line, process_file, transform};
pub use workflow::{RunOptions, RunStats, run};

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod stripper;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_configuration_file_option, get_log_file, get_verbosity};
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_default_logger, init_logger};
    pub use crate::stripper::Outcome;
    pub use crate::workflow::{RunOptions, RunStats, run};
}
