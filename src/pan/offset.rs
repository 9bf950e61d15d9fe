// SPDX-License-Identifier: MPL-2.0
//! Offset tracking for the panned content.
//!
//! The offset is the translation currently applied to the content, relative to
//! the container. It is re-read from the live content position at the start of
//! every gesture so that moves made behind the panner's back are picked up.

use iced::Vector;

/// Translation applied to the content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds an offset from a live content position.
    ///
    /// Values are truncated toward zero to whole pixels and anything that is
    /// not a finite number reads as 0.
    #[must_use]
    pub fn from_live(position: Vector) -> Self {
        Self {
            x: whole_pixels(position.x),
            y: whole_pixels(position.y),
        }
    }

    /// Adds a displacement and returns the new offset.
    pub fn shift(&mut self, delta: Vector) -> Self {
        self.x += delta.x;
        self.y += delta.y;
        *self
    }

    #[must_use]
    pub fn as_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

impl From<Offset> for Vector {
    fn from(offset: Offset) -> Self {
        offset.as_vector()
    }
}

fn whole_pixels(value: f32) -> f32 {
    if value.is_finite() {
        value.trunc()
    } else {
        0.0
    }
}
