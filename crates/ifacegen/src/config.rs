//! Generator configuration.
//!
//! Loaded from an optional `ifacegen.toml` in the project root. Every key
//! has a default, so the file only needs the values that differ.
//!
//! Example ifacegen.toml:
//! ```toml
//! output_root = "generated"
//! manifest = "package.json"
//! package_suffix = "-interfaces"
//!
//! [typescript]
//! export = false
//! ```

use crate::error::Error;
use crate::output::TypeScriptOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "ifacegen.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output directory, relative to the project root.
    pub output_root: PathBuf,
    /// Project manifest, relative to the project root.
    pub manifest: PathBuf,
    /// Appended to the project name to form the package name.
    pub package_suffix: String,
    pub typescript: TypeScriptOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("generated"),
            manifest: PathBuf::from("package.json"),
            package_suffix: "-interfaces".to_string(),
            typescript: TypeScriptOptions::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load `ifacegen.toml` from `root`, or defaults if there is none.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::io(path, e)),
        };
        toml::from_str(&content).map_err(|source| Error::Config { path, source })
    }
}
