// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_toaster::design_tokens::{opacity, palette, sizing, spacing};
    use iced_toaster::{mount_provider, variant_style, Severity};

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::SUCCESS_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_MEDIUM;

        // Sizing
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn variant_styles_are_distinct_per_severity() {
        let theme = Theme::Light;
        let mut seen = Vec::new();
        for severity in Severity::ALL {
            let style = variant_style(severity, &theme);
            assert!(
                !seen.contains(&style),
                "severity {severity} reuses another severity's style"
            );
            seen.push(style);
        }
    }

    #[test]
    fn default_variant_tracks_the_theme() {
        let light = variant_style(Severity::Default, &Theme::Light);
        let dark = variant_style(Severity::Default, &Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn provider_config_is_stable_across_calls() {
        assert_eq!(mount_provider(), mount_provider());
        assert_eq!(mount_provider(), mount_provider());
    }
}
