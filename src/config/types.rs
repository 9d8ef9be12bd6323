//! Configuration types and defaults for diffscan.

use crate::annotation::DEFAULT_MESSAGE_TEMPLATE;
use serde::{Deserialize, Serialize};

/// How the CLI prints annotations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One human-readable line per annotation.
    #[default]
    Text,
    /// One JSON object per annotation, one per line.
    Json,
}

/// Default message template for diff annotations.
pub fn default_message_template() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}
