//! Alignment settings
//!
//! Loaded from a TOML file; every key is optional. Command-line flags
//! override whatever the file sets.
//!
//! ```toml
//! anchor_type = "P"
//! precision = "decimal"
//! centralise_reference = true
//! centralise_incoming = true
//! ```

use std::path::Path;

use ribo_algos::{AlignParams, Precision, DEFAULT_ANCHOR};
use serde::Deserialize;

use crate::error::{CmdError, CmdResult};

/// Settings for the `align` command
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignSettings {
    /// Label of the anchor atoms (default: "P")
    #[serde(default = "default_anchor_type")]
    pub anchor_type: String,

    /// Arithmetic for applying the rotation (default: native)
    #[serde(default)]
    pub precision: Precision,

    /// Center the reference frame before aligning onto it (default: true)
    #[serde(default = "default_true")]
    pub centralise_reference: bool,

    /// Center the incoming frame before aligning it (default: true)
    #[serde(default = "default_true")]
    pub centralise_incoming: bool,
}

fn default_anchor_type() -> String {
    DEFAULT_ANCHOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AlignSettings {
    fn default() -> Self {
        Self {
            anchor_type: default_anchor_type(),
            precision: Precision::default(),
            centralise_reference: true,
            centralise_incoming: true,
        }
    }
}

impl AlignSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> CmdResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CmdError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> CmdResult<Self> {
        let settings: AlignSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides; `None` keeps the current value
    pub fn with_overrides(
        mut self,
        anchor_type: Option<String>,
        precision: Option<Precision>,
        no_center: bool,
    ) -> CmdResult<Self> {
        if let Some(anchor) = anchor_type {
            self.anchor_type = anchor;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        if no_center {
            self.centralise_reference = false;
            self.centralise_incoming = false;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CmdResult<()> {
        if self.anchor_type.trim().is_empty() {
            return Err(CmdError::invalid_arg("anchor_type", "must not be empty"));
        }
        if self.anchor_type.chars().any(char::is_whitespace) {
            return Err(CmdError::invalid_arg(
                "anchor_type",
                "must not contain whitespace",
            ));
        }
        Ok(())
    }

    /// Core alignment parameters
    pub fn to_params(&self) -> AlignParams {
        AlignParams {
            anchor_type: self.anchor_type.clone(),
            precision: self.precision,
        }
    }
}
