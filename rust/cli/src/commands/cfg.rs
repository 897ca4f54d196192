//! Configuration command handler.
//!
//! Shows each setting `count` and `deal` fall back on, with the layer it was
//! resolved from (default, configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "ignore_case": {
//!     "value": false,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::display_warning(err, "check SHOWDOWN_CONFIG and SHOWDOWN_* variables")?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "ignore_case": {
            "value": config.ignore_case,
            "source": sources.ignore_case,
        },
        "allow_duplicates": {
            "value": config.allow_duplicates,
            "source": sources.allow_duplicates,
        },
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
