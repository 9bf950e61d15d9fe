// SPDX-License-Identifier: MPL-2.0
//! The host side of the panner.
//!
//! A [`Surface`] owns the actual container and content: it knows where they
//! are, moves the content when asked, and resolves selectors to on-screen
//! rectangles. The panner never looks at pixels or widgets directly.

use super::controls::Control;
use iced::{Rectangle, Vector};
use std::time::Duration;

/// How a content position write should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Jump straight to the new position.
    #[default]
    Instant,
    /// Ease toward the new position over the given duration.
    Animated(Duration),
}

/// Where a pointer-down landed, as reported by the host's hit testing.
///
/// Controls nested inside other elements must be reported as the innermost
/// hit, e.g. a center button sitting on the circle is [`Control::Center`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Outside the container subtree.
    Outside,
    /// The container itself, outside the content.
    Container,
    /// The content or anything inside it.
    Content,
    /// An on-screen control.
    Control(Control),
}

impl Target {
    /// Whether a press here focuses the viewport.
    #[must_use]
    pub fn is_within_container(&self) -> bool {
        !matches!(self, Target::Outside)
    }

    /// Whether a press here starts a drag.
    #[must_use]
    pub fn starts_drag(&self) -> bool {
        matches!(self, Target::Container | Target::Content)
    }
}

/// Geometry and position access the panner needs from its host.
///
/// All rectangles share one coordinate space (window or page). The content
/// position is relative to the container's origin.
pub trait Surface {
    /// Bounds of the viewport container.
    fn container_bounds(&self) -> Rectangle;

    /// Bounds of the content at its current position.
    fn content_bounds(&self) -> Rectangle;

    /// Live translation of the content inside the container.
    ///
    /// May be non-finite if the host cannot make sense of its own state; the
    /// panner reads that as zero.
    fn content_position(&self) -> Vector;

    /// Moves the content to `position` relative to the container.
    fn set_content_position(&mut self, position: Vector, transition: Transition);

    /// Resolves a selector to the bounds of the first matching element.
    fn query(&self, selector: &str) -> Option<Rectangle>;
}
