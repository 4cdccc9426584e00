//! Settings for the `catalog` runner, read from TOML.
//!
//! ```toml
//! demos = ["observer", "strategy"]
//! banners = false
//! coffee_answer = "yes"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::Demo;
use crate::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Demos to run, in order.
    pub demos: Vec<Demo>,
    /// Print a coloured header before each demo.
    pub banners: bool,
    /// Answer given to the coffee prompt instead of reading stdin.
    pub coffee_answer: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            demos: Demo::ALL.to_vec(),
            banners: true,
            coffee_answer: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
