//! Layered configuration for display defaults.
//!
//! Widgets ship with sensible defaults (5 page links, percent out of 100)
//! but deployments override them, so the CLI honors the same layering the
//! component library documents:
//! CLI flags > `TRELLIS_*` environment > `trellis.toml` > built-in defaults.

use std::path::Path;

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use trellis_core::{ByteUnit, DEFAULT_PAGES_TO_SHOW, DEFAULT_PERCENT_MAX};

use crate::error::{CliError, Result};

/// Display defaults shared by the formatting subcommands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many page links a pagination window shows.
    pub pages_to_show: usize,

    /// The maximum a percent-complete value is measured against.
    pub percent_max: f64,

    /// Force every byte-size display into this unit (e.g. "GB").
    ///
    /// Unset means auto-detect per value, which is what the UI does.
    /// Typed as [`ByteUnit`] so a typo fails at config load instead of
    /// being silently ignored at render time.
    pub byte_unit: Option<ByteUnit>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pages_to_show: DEFAULT_PAGES_TO_SHOW,
            percent_max: DEFAULT_PERCENT_MAX,
            byte_unit: None,
        }
    }
}

impl DisplayConfig {
    /// Load configuration from defaults, an optional TOML file, and the
    /// environment.
    ///
    /// With no explicit path, `trellis.toml` in the working directory is
    /// used when present. CLI flags are applied by the caller on top of
    /// the result, so they win over every layer here.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a layer fails to parse or the
    /// merged result has the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let config_file = path.map(Path::to_path_buf).or_else(|| {
            let default_path = Path::new("trellis.toml");
            default_path.exists().then(|| default_path.to_path_buf())
        });

        if let Some(file) = config_file {
            figment = figment.merge(Toml::file(file));
        }

        figment = figment.merge(Env::prefixed("TRELLIS_"));

        figment
            .extract()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Like [`load`](Self::load), but errors if an explicit path is missing.
    ///
    /// `--config` pointing at a file that does not exist is a user mistake
    /// worth reporting, unlike the optional default lookup.
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::load(Some(path))
    }
}
