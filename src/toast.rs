// SPDX-License-Identifier: MPL-2.0
//! The toast request value object.
//!
//! A [`Toast`] is built by the caller, handed to [`show`](crate::show::show),
//! and not retained by this layer. Every field the host needs travels on it:
//! optional title and description text, an opaque action handle, the severity,
//! the display duration, and a pass-through map of extra presentation
//! attributes the host may interpret.

use crate::config::defaults::DEFAULT_DURATION_MS;
use crate::severity::Severity;
use std::collections::BTreeMap;
use std::time::Duration;

/// An opaque action handle forwarded to the host unmodified.
///
/// The host renders it as a button and reports activation through its own
/// message type; this layer never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    label: String,
}

impl ToastAction {
    /// Creates an action with the given button label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A toast request, consumed by [`show`](crate::show::show).
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    title: Option<String>,
    description: Option<String>,
    action: Option<ToastAction>,
    severity: Severity,
    /// `None` disables auto-dismissal (manual dismiss only).
    duration: Option<Duration>,
    extras: BTreeMap<String, String>,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            action: None,
            severity: Severity::Default,
            duration: Some(Duration::from_millis(DEFAULT_DURATION_MS)),
            extras: BTreeMap::new(),
        }
    }
}

impl Toast {
    /// Creates a toast with the given title and the default severity.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).severity(Severity::Info)
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).severity(Severity::Success)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title).severity(Severity::Warning)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).severity(Severity::Error)
    }

    /// Sets the severity.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the description shown under the title.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an action button.
    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the display duration, overriding the 5000 ms default.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the display duration in milliseconds.
    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    /// Disables auto-dismissal; the toast stays until dismissed by handle.
    ///
    /// Useful for errors that must not scroll away unread.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Adds a pass-through presentation attribute, forwarded to the host
    /// unmodified.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Returns the title text, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description text, if any.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the attached action, if any.
    #[must_use]
    pub fn action_handle(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity_level(&self) -> Severity {
        self.severity
    }

    /// Returns the display duration (`None` means manual dismiss only).
    #[must_use]
    pub fn display_duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the pass-through attributes.
    #[must_use]
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Option<String>,
        Option<String>,
        Option<ToastAction>,
        Severity,
        Option<Duration>,
        BTreeMap<String, String>,
    ) {
        (
            self.title,
            self.description,
            self.action,
            self.severity,
            self.duration,
            self.extras,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toast_has_default_severity_and_5s_duration() {
        let toast = Toast::default();
        assert_eq!(toast.severity_level(), Severity::Default);
        assert_eq!(toast.display_duration(), Some(Duration::from_millis(5000)));
        assert!(toast.title().is_none());
    }

    #[test]
    fn constructors_set_the_matching_severity() {
        assert_eq!(Toast::info("").severity_level(), Severity::Info);
        assert_eq!(Toast::success("").severity_level(), Severity::Success);
        assert_eq!(Toast::warning("").severity_level(), Severity::Warning);
        assert_eq!(Toast::error("").severity_level(), Severity::Error);
        assert_eq!(Toast::new("").severity_level(), Severity::Default);
    }

    #[test]
    fn builder_pattern_composes() {
        let toast = Toast::warning("Low disk space")
            .description("Less than 500 MB remain")
            .action(ToastAction::new("Open settings"))
            .duration_ms(1000)
            .with_extra("placement", "top");

        assert_eq!(toast.title(), Some("Low disk space"));
        assert_eq!(toast.description_text(), Some("Less than 500 MB remain"));
        assert_eq!(
            toast.action_handle().map(ToastAction::label),
            Some("Open settings")
        );
        assert_eq!(toast.display_duration(), Some(Duration::from_millis(1000)));
        assert_eq!(toast.extras().get("placement").map(String::as_str), Some("top"));
    }

    #[test]
    fn persistent_clears_the_duration() {
        let toast = Toast::error("Export failed").persistent();
        assert_eq!(toast.display_duration(), None);
    }
}
