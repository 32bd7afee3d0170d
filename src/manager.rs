// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` is the bundled [`ToastHost`]: it queues prepared toasts,
//! limits how many are visible at once, and dismisses them when their display
//! duration elapses or a dismiss message arrives. Rendering is separate, in
//! [`widget`](crate::widget).

use crate::config::defaults::{DEFAULT_MAX_VISIBLE, TICK_INTERVAL_MS};
use crate::config::{Config, Position};
use crate::host::{PreparedToast, ToastHost, ToastId};
use crate::provider::ProviderConfig;
use crate::severity::Severity;
use iced::Subscription;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// A toast's action button was pressed. The manager dismisses the toast;
    /// applications inspect the message before forwarding to react to it.
    Action(ToastId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Observer for toasts passing through the manager.
///
/// Installed by applications that mirror warning and error toasts into their
/// own diagnostics; success and info toasts are not reported.
pub trait EventSink: std::fmt::Debug {
    fn toast_shown(&self, severity: Severity, title: Option<&str>);
}

#[derive(Debug)]
struct Entry {
    id: ToastId,
    toast: PreparedToast,
    /// When the toast became visible. Reset on promotion from the queue so
    /// queued toasts get their full display time.
    shown_at: Instant,
}

impl Entry {
    fn is_expired(&self) -> bool {
        match self.toast.duration() {
            Some(duration) => self.shown_at.elapsed() >= duration,
            None => false,
        }
    }
}

/// Manages the toast queue and visible toasts.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<Entry>,
    /// Queued toasts waiting to be displayed.
    queue: VecDeque<Entry>,
    provider: ProviderConfig,
    max_visible: usize,
    position: Position,
    sink: Option<Box<dyn EventSink>>,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            provider: ProviderConfig::default(),
            max_visible: DEFAULT_MAX_VISIBLE,
            position: Position::default(),
            sink: None,
        }
    }
}

impl Manager {
    /// Creates a new empty manager with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with limits and placement taken from a [`Config`].
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self {
            max_visible: config.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE),
            position: config.position.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Installs an observer for warning and error toasts.
    pub fn set_event_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Returns the mounted provider configuration.
    #[must_use]
    pub fn provider(&self) -> ProviderConfig {
        self.provider
    }

    /// Returns the corner the toast stack anchors to.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|e| e.id == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|e| e.id == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick event, dismissing any toasts whose display duration
    /// has elapsed. Driven by [`subscription`](Self::subscription).
    pub fn tick(&mut self) {
        let expired: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|e| e.is_expired())
            .map(|e| e.id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) | Message::Action(id) => {
                self.dismiss(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the tick subscription while any toast is alive.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_toasts() {
            iced::time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Returns the currently visible toasts with their handles.
    pub fn visible(&self) -> impl Iterator<Item = (ToastId, &PreparedToast)> {
        self.visible.iter().map(|e| (e.id, &e.toast))
    }

    /// Returns the number of visible toasts.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued toasts.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any toasts (visible or queued).
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all toasts (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes toasts from the queue to visible while there is space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < self.max_visible {
            if let Some(mut entry) = self.queue.pop_front() {
                entry.shown_at = Instant::now();
                self.visible.push_back(entry);
            } else {
                break;
            }
        }
    }
}

impl ToastHost for Manager {
    fn mount(&mut self, config: ProviderConfig) {
        self.provider = config;
    }

    fn show(&mut self, toast: PreparedToast) -> ToastId {
        if let Some(sink) = &self.sink {
            match toast.severity() {
                Severity::Warning | Severity::Error => {
                    sink.toast_shown(toast.severity(), toast.title().text());
                }
                Severity::Default | Severity::Info | Severity::Success => {}
            }
        }

        let entry = Entry {
            id: ToastId::new(),
            toast,
            shown_at: Instant::now(),
        };
        let id = entry.id;

        if self.visible.len() < self.max_visible {
            self.visible.push_front(entry);
        } else {
            self.queue.push_back(entry);
        }

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::show::show;
    use crate::toast::Toast;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn show_adds_to_visible_when_space_available() {
        let mut manager = Manager::new();
        show(&mut manager, Toast::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn show_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..DEFAULT_MAX_VISIBLE {
            show(&mut manager, Toast::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), DEFAULT_MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        show(&mut manager, Toast::success("queued"));
        assert_eq!(manager.visible_count(), DEFAULT_MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_removes_from_visible() {
        let mut manager = Manager::new();
        let id = show(&mut manager, Toast::success("test"));
        assert_eq!(manager.visible_count(), 1);

        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();

        let first = show(&mut manager, Toast::success("visible-0"));
        for i in 1..DEFAULT_MAX_VISIBLE {
            show(&mut manager, Toast::success(format!("visible-{i}")));
        }
        show(&mut manager, Toast::success("queued"));
        assert_eq!(manager.queued_count(), 1);

        manager.dismiss(first);

        assert_eq!(manager.visible_count(), DEFAULT_MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(ToastId::new()));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            show(&mut manager, Toast::success(format!("test-{i}")));
        }

        manager.clear();
        assert!(!manager.has_toasts());
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let id = show(&mut manager, Toast::success("test"));

        manager.handle_message(Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn action_message_dismisses_its_toast() {
        let mut manager = Manager::new();
        let id = show(
            &mut manager,
            Toast::error("Export failed").action(crate::ToastAction::new("Retry")),
        );

        manager.handle_message(Message::Action(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn persistent_toasts_survive_ticks() {
        let mut manager = Manager::new();
        let id = show(&mut manager, Toast::error("test-error").persistent());

        manager.tick();
        assert_eq!(manager.visible_count(), 1);

        manager.dismiss(id);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn tick_dismisses_expired_toasts() {
        let mut manager = Manager::new();
        show(&mut manager, Toast::success("gone").duration_ms(0));
        show(&mut manager, Toast::success("stays").duration_ms(60_000));
        assert_eq!(manager.visible_count(), 2);

        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn with_config_applies_limits() {
        let config = Config {
            max_visible: Some(1),
            position: Some(Position::TopLeft),
            ..Config::default()
        };
        let mut manager = Manager::with_config(&config);

        show(&mut manager, Toast::success("a"));
        show(&mut manager, Toast::success("b"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 1);
        assert_eq!(manager.position(), Position::TopLeft);
    }

    #[derive(Debug, Default)]
    struct RecordingSink {
        seen: Rc<RefCell<Vec<Severity>>>,
    }

    impl EventSink for RecordingSink {
        fn toast_shown(&self, severity: Severity, _title: Option<&str>) {
            self.seen.borrow_mut().push(severity);
        }
    }

    #[test]
    fn event_sink_sees_warnings_and_errors_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut manager = Manager::new();
        manager.set_event_sink(Box::new(RecordingSink { seen: seen.clone() }));

        show(&mut manager, Toast::success("ok"));
        show(&mut manager, Toast::info("fyi"));
        show(&mut manager, Toast::warning("careful"));
        show(&mut manager, Toast::error("broken"));

        assert_eq!(&*seen.borrow(), &[Severity::Warning, Severity::Error]);
    }
}
