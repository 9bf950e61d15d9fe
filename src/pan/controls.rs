// SPDX-License-Identifier: MPL-2.0
//! Directional controls: direction table, keyboard map and the continuous
//! move loop shared by keys, buttons and the circle.

use iced::keyboard::{key::Named, Key};
use iced::Vector;
use std::fmt;
use std::time::Duration;

/// One of the eight panning directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Control name used in configuration, e.g. `"up/right"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::UpRight => "up/right",
            Direction::Right => "right",
            Direction::DownRight => "down/right",
            Direction::Down => "down",
            Direction::DownLeft => "down/left",
            Direction::Left => "left",
            Direction::UpLeft => "up/left",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Movement ratio for this direction. Diagonals are halved on each axis.
    #[must_use]
    pub fn ratio(self) -> Vector {
        match self {
            Direction::Up => Vector::new(0.0, -1.0),
            Direction::UpRight => Vector::new(0.5, -0.5),
            Direction::Right => Vector::new(1.0, 0.0),
            Direction::DownRight => Vector::new(0.5, 0.5),
            Direction::Down => Vector::new(0.0, 1.0),
            Direction::DownLeft => Vector::new(-0.5, 0.5),
            Direction::Left => Vector::new(-1.0, 0.0),
            Direction::UpLeft => Vector::new(-0.5, -0.5),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Movement ratio for a direction name; `(0, 0)` for anything unknown.
#[must_use]
pub fn get_move_ratio(name: &str) -> Vector {
    Direction::from_name(name).map_or(Vector::new(0.0, 0.0), Direction::ratio)
}

/// Direction bound to a key: arrows and WASD (case-insensitive).
#[must_use]
pub fn key_direction(key: &Key) -> Option<Direction> {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Direction::Left),
        Key::Named(Named::ArrowUp) => Some(Direction::Up),
        Key::Named(Named::ArrowRight) => Some(Direction::Right),
        Key::Named(Named::ArrowDown) => Some(Direction::Down),
        Key::Character(c) if c.eq_ignore_ascii_case("a") => Some(Direction::Left),
        Key::Character(c) if c.eq_ignore_ascii_case("w") => Some(Direction::Up),
        Key::Character(c) if c.eq_ignore_ascii_case("d") => Some(Direction::Right),
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(Direction::Down),
        _ => None,
    }
}

/// A control the host can bind to an on-screen element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    Direction(Direction),
    /// Re-centers the content.
    Center,
    /// Joystick-style circle.
    Circle,
    /// A name that matches no known control. Pressing it starts a session
    /// that moves nothing.
    Other(String),
}

impl Control {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Control::Direction(d) => d.name(),
            Control::Center => "center",
            Control::Circle => "circle",
            Control::Other(name) => name,
        }
    }

    /// Movement ratio of a button press on this control.
    #[must_use]
    pub fn ratio(&self) -> Vector {
        match self {
            Control::Direction(d) => d.ratio(),
            _ => Vector::new(0.0, 0.0),
        }
    }

    /// Selector used when a control is enabled without naming an element,
    /// e.g. `#pan-up-right`.
    #[must_use]
    pub fn default_selector(&self) -> String {
        format!("#pan-{}", self.name().replace('/', "-"))
    }
}

impl From<&str> for Control {
    fn from(name: &str) -> Self {
        match name {
            "center" => Control::Center,
            "circle" => Control::Circle,
            _ => Direction::from_name(name)
                .map_or_else(|| Control::Other(name.to_string()), Control::Direction),
        }
    }
}

impl From<Direction> for Control {
    fn from(direction: Direction) -> Self {
        Control::Direction(direction)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Continuous movement driven by a held control.
///
/// The owner applies one [`Continuous::tick`] as soon as the loop starts,
/// then one more every [`Continuous::frame_interval`] while
/// [`Continuous::is_active`] holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Continuous {
    fps: u32,
    speed: f32,
    vector: Vector,
    active: bool,
}

impl Continuous {
    /// `fps` is clamped to at least 1; `speed` is in pixels per second.
    #[must_use]
    pub fn new(fps: u32, speed: f32) -> Self {
        Self {
            fps: fps.max(1),
            speed,
            vector: Vector::new(0.0, 0.0),
            active: false,
        }
    }

    /// Sets the per-frame vector from a movement ratio.
    ///
    /// `speed` overrides the default speed for this control only.
    pub fn set_control(&mut self, ratio: Vector, speed: Option<f32>) {
        let per_frame = speed.unwrap_or(self.speed) / self.fps as f32;
        self.vector = ratio * per_frame;
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stops the loop. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Displacement for one frame, or `None` when stopped.
    #[must_use]
    pub fn tick(&self) -> Option<Vector> {
        self.active.then_some(self.vector)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn vector(&self) -> Vector {
        self.vector
    }

    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps))
    }
}
