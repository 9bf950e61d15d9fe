// SPDX-License-Identifier: MPL-2.0
//! Host-agnostic panning core.
//!
//! The [`Panner`] turns pointer drags, held keys, direction buttons and a
//! joystick circle into content translations. It reads and writes the content
//! through a [`Surface`] that the host implements, and reports the control
//! events it raised so hosts can observe them.
//!
//! - [`offset`] - Translation bookkeeping
//! - [`drag`] - Pointer drag deltas
//! - [`controls`] - Directions, key bindings and the continuous move loop
//! - [`circle`] - Joystick ratio computation
//! - [`surface`] - The host trait and hit-test targets
//! - [`panner`] - Orchestration and session handling

pub mod circle;
pub mod controls;
pub mod drag;
pub mod offset;
pub mod panner;
pub mod surface;

pub use controls::{get_move_ratio, Control, Direction};
pub use offset::Offset;
pub use panner::{Input, PanEvent, Panner, Response, Session, Settings, Source};
pub use surface::{Surface, Target, Transition};

use iced::Vector;

/// Events raised by controls and consumed by the panner.
///
/// Hosts can raise these themselves with [`Panner::trigger`], e.g. to
/// re-center the content from a menu entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// A control was engaged with the given movement ratio. The speed, in
    /// pixels per second, overrides the configured one for this session.
    Down(Vector, Option<f32>),
    /// The engaged control now points elsewhere.
    Change(Vector, Option<f32>),
    /// The engaged control was released.
    Up,
    /// Re-center the content.
    Center,
}
