// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default display duration before a toast auto-dismisses (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Maximum number of toasts visible at once; the rest queue.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Interval between auto-dismiss checks (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 250;
