// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a toast notification presentation layer for applications
//! built with the Iced GUI framework.
//!
//! The crate splits the problem in two. A thin, host-agnostic layer resolves a
//! severity into an icon and a style bundle, composes the toast title, and
//! hands the result to whatever implements [`host::ToastHost`]. A reference
//! host ([`manager::Manager`] plus the [`widget`] views) renders toasts
//! bottom-right with a bounded visible stack and tick-driven auto-dismissal.
//!
//! ```ignore
//! use iced_toaster::{show, Manager, Toast};
//!
//! let mut manager = Manager::new();
//! manager.mount(iced_toaster::mount_provider());
//!
//! let handle = show(&mut manager, Toast::success("Image saved"));
//! // ... later, from the update loop:
//! manager.dismiss(handle);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.2.0")]

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod host;
pub mod icons;
pub mod manager;
pub mod provider;
pub mod severity;
pub mod show;
pub mod style;
pub mod toast;
pub mod widget;

pub use error::{Error, Result};
pub use host::{CompositeTitle, PreparedToast, ToastHost, ToastId};
pub use manager::{Manager, Message as ManagerMessage};
pub use provider::{mount_provider, ProviderConfig, SlotStyle};
pub use severity::Severity;
pub use show::show;
pub use style::{variant_style, VariantStyle};
pub use toast::{Toast, ToastAction};
