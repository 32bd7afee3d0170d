// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the toast glyphs.
//!
//! Icons are small inline SVG documents embedded at compile time; handles are
//! cached using `OnceLock` so repeated renders share one decoded handle. The
//! severity glyphs carry fixed fill colors matching the semantic palette in
//! [`design_tokens`](crate::design_tokens), so they render identically on
//! light and dark themes.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Visual glyph identifiers resolvable to a drawable via [`glyph`].
///
/// Keeping the identifier separate from the drawable lets non-rendering code
/// (severity resolution, tests, recording host stubs) talk about icons without
/// touching the widget layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Circled lowercase "i".
    Info,
    /// Checkmark inside a circle.
    CheckCircle,
    /// Exclamation mark inside a triangle.
    AlertTriangle,
    /// Exclamation mark inside a circle.
    AlertCircle,
    /// X shape.
    Cross,
}

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $svg:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = $svg.as_bytes();
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Severity Icons (fixed semantic colors)
// =============================================================================

define_icon!(
    info,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#6496FF" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/></svg>"##,
    "Info icon: circled lowercase \"i\", info blue."
);

define_icon!(
    check_circle,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#43B367" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/></svg>"##,
    "Check-circle icon: checkmark inside a circle, success green."
);

define_icon!(
    alert_triangle,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#F1A620" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/></svg>"##,
    "Alert-triangle icon: exclamation mark inside a triangle, warning amber."
);

define_icon!(
    alert_circle,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#E53935" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/></svg>"##,
    "Alert-circle icon: exclamation mark inside a circle, error red."
);

// =============================================================================
// Utility Icons
// =============================================================================

define_icon!(
    cross,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#666666" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 6 6 18"/><path d="m6 6 12 12"/></svg>"##,
    "Cross icon: X shape, neutral gray."
);

/// Resolves a [`Glyph`] identifier to its drawable.
pub fn glyph(glyph: Glyph) -> Svg<'static> {
    match glyph {
        Glyph::Info => info(),
        Glyph::CheckCircle => check_circle(),
        Glyph::AlertTriangle => alert_triangle(),
        Glyph::AlertCircle => alert_circle(),
        Glyph::Cross => cross(),
    }
}

/// Creates an icon with a fixed square size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_glyphs_resolve_without_panicking() {
        let _ = glyph(Glyph::Info);
        let _ = glyph(Glyph::CheckCircle);
        let _ = glyph(Glyph::AlertTriangle);
        let _ = glyph(Glyph::AlertCircle);
        let _ = glyph(Glyph::Cross);
    }
}
