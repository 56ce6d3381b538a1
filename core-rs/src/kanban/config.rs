/**
 * config.rs
 * Parser for board definition files (YAML format)
 *
 * Format:
 * ```yaml
 * apiVersion: gx/v1
 * kind: Board
 * metadata:
 *   name: Things to Do
 * spec:
 *   statuses:
 *     - Backlog
 *     - Todo
 *     - Done
 * ```
 *
 * `spec.statuses` is optional; boards without it start with the default seed.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{GxError, Result};
use crate::kanban::board::BACKLOG;

pub const API_VERSION: &str = "gx/v1";
pub const BOARD_KIND: &str = "Board";

/// Board definition file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: BoardMetadata,
    #[serde(default)]
    pub spec: BoardSpec,
}

/// Board metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardMetadata {
    pub name: String,
}

/// Board specification
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoardSpec {
    /// Initial statuses, replacing the default seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,
}

impl BoardConfig {
    /// Build a config for a board that uses the default statuses
    pub fn new(name: &str) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: BOARD_KIND.to_string(),
            metadata: BoardMetadata { name: name.to_string() },
            spec: BoardSpec::default(),
        }
    }

    /// Load and validate a board definition
    ///
    /// # Example
    /// ```no_run
    /// use gx_core::BoardConfig;
    ///
    /// let config = BoardConfig::load("board.yaml").unwrap();
    /// println!("{}", config.metadata.name);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(GxError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a board definition from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: BoardConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check board invariants
    ///
    /// # Errors
    /// `GxError::Validation` if:
    /// - `kind` is not `Board`
    /// - `metadata.name` is blank
    /// - `spec.statuses` is present but empty or missing "Backlog"
    pub fn validate(&self) -> Result<()> {
        if self.kind != BOARD_KIND {
            return Err(GxError::Validation(format!(
                "expected kind '{}', found '{}'",
                BOARD_KIND, self.kind
            )));
        }

        if self.metadata.name.trim().is_empty() {
            return Err(GxError::Validation("board name cannot be blank".to_string()));
        }

        if let Some(statuses) = &self.spec.statuses {
            if statuses.is_empty() {
                return Err(GxError::Validation("statuses cannot be empty".to_string()));
            }
            if !statuses.iter().any(|s| s == BACKLOG) {
                return Err(GxError::Validation(format!(
                    "statuses must include '{}'",
                    BACKLOG
                )));
            }
        }

        Ok(())
    }
}
