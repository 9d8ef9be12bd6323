//! Configuration model for diffscan.

use crate::annotation::Priority;
use serde::{Deserialize, Serialize};

use super::types::{OutputFormat, default_message_template};

/// Configuration for diffscan.
///
/// This struct represents the contents of `.diffscan.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Message of every annotation, with `{old}` and `{new}` placeholders.
    /// The hunk's section text, when present, is appended on its own line.
    #[serde(default = "default_message_template")]
    pub message_template: String,

    /// Priority assigned to every annotation.
    #[serde(default)]
    pub priority: Priority,

    /// Default output format of `diffscan scan`.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_template: default_message_template(),
            priority: Priority::default(),
            format: OutputFormat::default(),
        }
    }
}
