// SPDX-License-Identifier: MPL-2.0
//! Severity levels and icon resolution.
//!
//! `Severity` is the closed classification of a toast's tone. Icon resolution
//! is a total function: four severities map to a glyph, `Default` (and only
//! `Default`) maps to none. Unrecognized values cannot exist inside the
//! process; at text boundaries (config files, string parsing) an unknown tag
//! is rejected with [`Error::UnknownTag`](crate::Error).

use crate::error::Error;
use crate::icons::Glyph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level determines the toast's icon and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral message using the base theme colors, no icon.
    #[default]
    Default,
    /// Informational message (blue).
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (amber).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 5] = [
        Severity::Default,
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the glyph for this severity, or `None` for [`Severity::Default`].
    ///
    /// Total over the enum; no severity fails to resolve.
    #[must_use]
    pub fn icon(self) -> Option<Glyph> {
        match self {
            Severity::Info => Some(Glyph::Info),
            Severity::Success => Some(Glyph::CheckCircle),
            Severity::Warning => Some(Glyph::AlertTriangle),
            Severity::Error => Some(Glyph::AlertCircle),
            Severity::Default => None,
        }
    }

    /// Returns the lowercase tag used in config files and display output.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Severity::Default),
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(Error::UnknownTag(other.to_string())),
        }
    }
}
