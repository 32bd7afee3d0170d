// SPDX-License-Identifier: MPL-2.0
//! Per-severity style bundles.
//!
//! The style table is declarative: each severity maps to one record of
//! presentation tokens (surface, text, border). It is consulted by the
//! rendering layer, never computed, and is total over the enum. The `Default`
//! severity takes its colors from the active theme so neutral toasts follow
//! light/dark mode; the other four use fixed semantic tints from the palette.

use crate::design_tokens::palette;
use crate::severity::Severity;
use iced::{Color, Theme};

/// Resolved presentation colors for one severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyle {
    /// Toast surface color.
    pub background: Color,
    /// Title and description text color.
    pub text: Color,
    /// Accent border color.
    pub border: Color,
}

/// Returns the style bundle for a severity.
///
/// Total function; every severity resolves to a complete record.
#[must_use]
pub fn variant_style(severity: Severity, theme: &Theme) -> VariantStyle {
    match severity {
        Severity::Default => {
            let extended = theme.extended_palette();
            VariantStyle {
                background: extended.background.base.color,
                text: extended.background.base.text,
                border: extended.background.strong.color,
            }
        }
        Severity::Info => VariantStyle {
            background: palette::INFO_100,
            text: palette::INFO_700,
            border: palette::INFO_500,
        },
        Severity::Success => VariantStyle {
            background: palette::SUCCESS_100,
            text: palette::SUCCESS_700,
            border: palette::SUCCESS_500,
        },
        Severity::Warning => VariantStyle {
            background: palette::WARNING_100,
            text: palette::WARNING_700,
            border: palette::WARNING_500,
        },
        Severity::Error => VariantStyle {
            background: palette::ERROR_100,
            text: palette::ERROR_700,
            border: palette::ERROR_500,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_severity_has_a_distinct_style() {
        let theme = Theme::Light;
        let styles: Vec<VariantStyle> = Severity::ALL
            .iter()
            .map(|s| variant_style(*s, &theme))
            .collect();

        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_follows_the_theme_surface() {
        let light = variant_style(Severity::Default, &Theme::Light);
        let dark = variant_style(Severity::Default, &Theme::Dark);

        assert_ne!(light.background, dark.background);
        assert_eq!(
            light.background,
            Theme::Light.extended_palette().background.base.color
        );
    }

    #[test]
    fn semantic_styles_are_theme_independent() {
        let light = variant_style(Severity::Error, &Theme::Light);
        let dark = variant_style(Severity::Error, &Theme::Dark);
        assert_eq!(light, dark);
    }

    #[test]
    fn accent_borders_use_the_semantic_500_shades() {
        let theme = Theme::Light;
        assert_eq!(
            variant_style(Severity::Info, &theme).border,
            palette::INFO_500
        );
        assert_eq!(
            variant_style(Severity::Success, &theme).border,
            palette::SUCCESS_500
        );
        assert_eq!(
            variant_style(Severity::Warning, &theme).border,
            palette::WARNING_500
        );
        assert_eq!(
            variant_style(Severity::Error, &theme).border,
            palette::ERROR_500
        );
    }
}
