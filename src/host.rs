// SPDX-License-Identifier: MPL-2.0
//! The narrow interface between the trigger layer and a toast host.
//!
//! A host is anything that can receive a provider configuration once and
//! display prepared toasts afterwards: the bundled [`Manager`](crate::Manager)
//! in production, a recording stub in tests. Keeping the seam this small is
//! what lets the trigger logic be exercised without a running UI.

use crate::icons::Glyph;
use crate::provider::ProviderConfig;
use crate::severity::Severity;
use crate::toast::ToastAction;
use std::collections::BTreeMap;
use std::time::Duration;

/// Unique identifier for a displayed toast, minted by the host.
///
/// Callers keep it to dismiss or update the toast programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Mints a new process-unique id.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// The composed title handed to the host: an icon slot followed by the plain
/// title text, laid out horizontally with a fixed gap.
///
/// The icon slot is populated only when severity resolution yields a glyph,
/// so default-severity toasts render text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeTitle {
    icon: Option<Glyph>,
    text: Option<String>,
}

impl CompositeTitle {
    /// Fixed horizontal gap between the icon slot and the title text.
    pub const GAP: f32 = crate::design_tokens::spacing::XS;

    pub(crate) fn new(icon: Option<Glyph>, text: Option<String>) -> Self {
        Self { icon, text }
    }

    /// Returns the resolved icon glyph, if the severity carries one.
    #[must_use]
    pub fn icon(&self) -> Option<Glyph> {
        self.icon
    }

    /// Returns the plain title text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns whether neither an icon nor text is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.text.is_none()
    }
}

/// A fully resolved toast, ready for display.
///
/// Everything except the title travels through from the request unmodified;
/// the title has been replaced by its composed form. The severity rides along
/// so the rendering layer can consult the style table.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedToast {
    pub(crate) title: CompositeTitle,
    pub(crate) description: Option<String>,
    pub(crate) action: Option<ToastAction>,
    pub(crate) severity: Severity,
    pub(crate) duration: Option<Duration>,
    pub(crate) extras: BTreeMap<String, String>,
}

impl PreparedToast {
    /// Returns the composed title.
    #[must_use]
    pub fn title(&self) -> &CompositeTitle {
        &self.title
    }

    /// Returns the description text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the action handle, if any.
    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display duration (`None` means manual dismiss only).
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the pass-through attributes, forwarded unmodified.
    #[must_use]
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }
}

/// A toast display host.
///
/// Two operations, by design: accept the provider configuration at mount
/// time, and display a prepared toast. Rendering, stacking, timed
/// auto-dismissal, and manual-dismiss interaction are entirely the host's
/// responsibility.
pub trait ToastHost {
    /// Installs the provider configuration. Called once per application by
    /// convention; later calls replace the previous configuration.
    fn mount(&mut self, config: ProviderConfig);

    /// Queues a toast for display and returns its handle.
    fn show(&mut self, toast: PreparedToast) -> ToastId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn composite_title_reports_emptiness() {
        assert!(CompositeTitle::new(None, None).is_empty());
        assert!(!CompositeTitle::new(Some(Glyph::Info), None).is_empty());
        assert!(!CompositeTitle::new(None, Some("Saved".into())).is_empty());
    }
}
