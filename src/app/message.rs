// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw window event routed from the event subscription.
    Event(iced::Event),
    /// One frame of continuous panning elapsed.
    Tick(Instant),
    /// Animation frame while the content is easing toward a new position.
    Frame(Instant),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Configuration file to use instead of the default location.
    pub config_path: Option<PathBuf>,
    /// Overrides the configured frame rate.
    pub fps: Option<u32>,
    /// Overrides the configured speed, in pixels per second.
    pub speed: Option<f32>,
}
