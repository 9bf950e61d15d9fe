// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

// ==========================================================================
// Continuous Movement Defaults
// ==========================================================================

/// Frames per second of continuous (held control) movement.
pub const DEFAULT_FPS: u32 = 20;

/// Minimum allowed frame rate.
pub const MIN_FPS: u32 = 1;

/// Maximum allowed frame rate.
pub const MAX_FPS: u32 = 120;

/// Continuous movement speed in pixels per second.
pub const DEFAULT_SPEED: f32 = 200.0;

// ==========================================================================
// Centering Defaults
// ==========================================================================

/// Selector of the element brought to the container's center.
pub const DEFAULT_CENTER_SELECTOR: &str = "#center";

/// Duration of the animated centering move (in milliseconds).
pub const DEFAULT_CENTER_DURATION_MS: u64 = 500;

const _: () = {
    assert!(MIN_FPS >= 1);
    assert!(MIN_FPS <= DEFAULT_FPS && DEFAULT_FPS <= MAX_FPS);
};
