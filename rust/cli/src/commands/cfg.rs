//! Configuration command handler.
//!
//! Prints every resolved setting with the layer it came from:
//!
//! ```json
//! {
//!   "ante": {
//!     "value": 10,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config::ConfigResolved;
use crate::error::CliError;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ante": {
            "value": config.ante,
            "source": sources.ante,
        },
        "starting_sanity": {
            "value": config.starting_sanity,
            "source": sources.starting_sanity,
        },
        "reveal_on_fold": {
            "value": config.reveal_on_fold,
            "source": sources.reveal_on_fold,
        },
        "ai_type": {
            "value": config.ai_type,
            "source": sources.ai_type,
        },
        "courage": {
            "value": config.courage,
            "source": sources.courage,
        },
        "simulations": {
            "value": config.simulations,
            "source": sources.simulations,
        }
    });
    let json_str = serde_json::to_string_pretty(&display)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
