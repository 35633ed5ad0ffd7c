// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Login**: Delay between a successful sign-in and the screen switch
//! - **Tick**: Polling interval for time-driven UI state
//! - **Diagnostics**: Activity log capacity

use std::time::Duration;

// ==========================================================================
// Login Defaults
// ==========================================================================

/// Time the success message stays visible before the event list replaces
/// the login form (in milliseconds). Not user-configurable.
pub const LOGIN_SUCCESS_DELAY_MS: u64 = 1000;

/// [`LOGIN_SUCCESS_DELAY_MS`] as a `Duration`.
pub const LOGIN_SUCCESS_DELAY: Duration = Duration::from_millis(LOGIN_SUCCESS_DELAY_MS);

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the periodic tick that drives scheduled transitions and
/// notification auto-dismiss (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of activity entries kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 200;

/// Minimum activity log capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum activity log capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(LOGIN_SUCCESS_DELAY_MS > 0);
    assert!(TICK_INTERVAL_MS < LOGIN_SUCCESS_DELAY_MS);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_delay_is_one_second() {
        assert_eq!(LOGIN_SUCCESS_DELAY, Duration::from_secs(1));
    }
}
