/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "param_strip";

/// Application name used for identification
///
/// This is the name of the application used in configuration file paths
/// and application identification.
pub const APPLICATION: &str = "param_strip";

/// Annotation token stripped together with the parameter it precedes
pub const DEFAULT_ANNOTATION: &str = "@RequestHeader(\"X-User-Id\")";

/// Type-name token of the stripped parameter
pub const DEFAULT_TYPE_NAME: &str = "UUID";

/// Identifier of the stripped parameter
pub const DEFAULT_PARAMETER: &str = "usuarioId";

/// Import declaration removed when the type name has no remaining use
pub const DEFAULT_IMPORT: &str = "import java.util.UUID;";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local-logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Keep the log file in the current directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "";
