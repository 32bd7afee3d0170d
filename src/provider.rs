// SPDX-License-Identifier: MPL-2.0
//! The provider configuration installed on a host at mount time.
//!
//! [`mount_provider`] is a zero-argument factory returning a fixed set of
//! style overrides for the four toast regions a host styles: the container,
//! the description text, the primary action button, and the cancel button.
//! A slot field left at `None` defers to the variant style table or the
//! active theme.

use crate::design_tokens::palette;
use iced::Color;

/// Style overrides for one toast region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotStyle {
    /// Region background, `None` to defer.
    pub background: Option<Color>,
    /// Region text color, `None` to defer.
    pub text: Option<Color>,
    /// Region border color, `None` to defer.
    pub border: Option<Color>,
}

/// Provider configuration: one [`SlotStyle`] per toast region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProviderConfig {
    /// The toast card itself.
    pub container: SlotStyle,
    /// The description text under the title.
    pub description: SlotStyle,
    /// The primary action button.
    pub action_button: SlotStyle,
    /// The cancel/dismiss button.
    pub cancel_button: SlotStyle,
}

/// Returns the provider configuration to install on a host at application
/// startup.
///
/// Stateless and idempotent; every call returns an equal value. The container
/// defers entirely to the per-severity style table; the secondary regions get
/// fixed neutral colors so they read consistently across severities.
#[must_use]
pub fn mount_provider() -> ProviderConfig {
    ProviderConfig {
        container: SlotStyle::default(),
        description: SlotStyle {
            text: Some(palette::GRAY_700),
            ..SlotStyle::default()
        },
        action_button: SlotStyle {
            background: Some(palette::PRIMARY_500),
            text: Some(palette::WHITE),
            ..SlotStyle::default()
        },
        cancel_button: SlotStyle {
            background: Some(palette::GRAY_200),
            text: Some(palette::GRAY_700),
            ..SlotStyle::default()
        },
    }
}
