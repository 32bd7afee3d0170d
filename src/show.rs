// SPDX-License-Identifier: MPL-2.0
//! The notification trigger.
//!
//! [`show`] is a pure pass-through: it resolves the severity's icon, composes
//! the title, and forwards everything else to the host unmodified. It performs
//! no validation and has no error path; anything that can go wrong while
//! rendering or queuing is the host's responsibility.

use crate::host::{CompositeTitle, PreparedToast, ToastHost, ToastId};
use crate::toast::Toast;

/// Displays a toast on the given host and returns its handle.
///
/// The composite title gets an icon slot only when the severity resolves to a
/// glyph; a default-severity toast shows its text alone. The description,
/// action, duration, and extra attributes travel through untouched.
pub fn show(host: &mut impl ToastHost, toast: Toast) -> ToastId {
    let (title, description, action, severity, duration, extras) = toast.into_parts();

    let prepared = PreparedToast {
        title: CompositeTitle::new(severity.icon(), title),
        description,
        action,
        severity,
        duration,
        extras,
    };

    host.show(prepared)
}
