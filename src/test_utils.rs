// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a scriptable surface.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::pan::{Surface, Transition};
use iced::{Point, Rectangle, Size, Vector};

/// In-memory surface that applies every write instantly and records it.
#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub container: Rectangle,
    pub content_size: Size,
    pub position: Vector,
    /// Elements inside the content, in content coordinates.
    pub anchors: Vec<(String, Rectangle)>,
    /// Elements that do not move with the content.
    pub fixed: Vec<(String, Rectangle)>,
    pub writes: Vec<(Vector, Transition)>,
}

impl FakeSurface {
    /// A 400x300 container at (50, 20) holding 1000x800 content at (0, 0).
    pub fn new() -> Self {
        Self {
            container: Rectangle::new(Point::new(50.0, 20.0), Size::new(400.0, 300.0)),
            content_size: Size::new(1000.0, 800.0),
            position: Vector::new(0.0, 0.0),
            anchors: Vec::new(),
            fixed: Vec::new(),
            writes: Vec::new(),
        }
    }

    pub fn with_anchor(mut self, selector: &str, bounds: Rectangle) -> Self {
        self.anchors.push((selector.to_string(), bounds));
        self
    }

    pub fn with_fixed(mut self, selector: &str, bounds: Rectangle) -> Self {
        self.fixed.push((selector.to_string(), bounds));
        self
    }
}

impl Surface for FakeSurface {
    fn container_bounds(&self) -> Rectangle {
        self.container
    }

    fn content_bounds(&self) -> Rectangle {
        Rectangle::new(
            self.container.position() + self.position,
            self.content_size,
        )
    }

    fn content_position(&self) -> Vector {
        self.position
    }

    fn set_content_position(&mut self, position: Vector, transition: Transition) {
        self.position = position;
        self.writes.push((position, transition));
    }

    fn query(&self, selector: &str) -> Option<Rectangle> {
        let origin = self.container.position() + self.position;
        self.anchors
            .iter()
            .find(|(name, _)| name == selector)
            .map(|(_, bounds)| Rectangle::new(origin + Vector::new(bounds.x, bounds.y), bounds.size()))
            .or_else(|| {
                self.fixed
                    .iter()
                    .find(|(name, _)| name == selector)
                    .map(|(_, bounds)| *bounds)
            })
    }
}
