// SPDX-License-Identifier: MPL-2.0
//! The rendered side of the panner: a viewport, its content and the
//! on-screen controls.
//!
//! [`Scene`] implements [`Surface`] so a [`Panner`](crate::pan::Panner) can
//! drive it. Content moves are applied immediately or eased over time; eased
//! moves need [`Scene::advance`] to be called with frame timestamps until
//! [`Scene::is_animating`] turns false.

use crate::pan::{Control, Direction, Surface, Target, Transition};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{Point, Rectangle, Size, Vector};
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// An element inside the content, positioned in content coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub selector: String,
    pub bounds: Rectangle,
}

/// An on-screen control, positioned in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlWidget {
    pub control: Control,
    pub selector: String,
    pub bounds: Rectangle,
    /// Drawn as a circle rather than a square.
    pub round: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: Vector,
    to: Vector,
    started: Instant,
    duration: Duration,
}

impl Animation {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn position(&self, now: Instant) -> Vector {
        let eased = swing(self.progress(now));
        self.from + (self.to - self.from) * eased
    }
}

/// Ease-in-out curve used for animated moves.
#[must_use]
pub fn swing(progress: f32) -> f32 {
    0.5 - (progress * PI).cos() / 2.0
}

/// Selector bindings for a scene with every control shown.
#[must_use]
pub fn default_bindings() -> Vec<(Control, String)> {
    Direction::ALL
        .into_iter()
        .map(Control::Direction)
        .chain([Control::Center, Control::Circle])
        .map(|control| {
            let selector = control.default_selector();
            (control, selector)
        })
        .collect()
}

/// Viewport container with a movable content layer and fixed controls.
#[derive(Debug, Clone)]
pub struct Scene {
    container: Rectangle,
    content_size: Size,
    position: Vector,
    animation: Option<Animation>,
    now: Instant,
    anchors: Vec<Anchor>,
    bindings: Vec<(Control, String)>,
    controls: Vec<ControlWidget>,
}

impl Scene {
    /// Creates a scene filling a window of `window` size, with controls for
    /// every bound control that has an on-screen place.
    #[must_use]
    pub fn new(window: Size, content_size: Size, bindings: &[(Control, String)]) -> Self {
        let container = Rectangle::new(Point::ORIGIN, window);
        let bindings = bindings.to_vec();
        let controls = layout_controls(container, &bindings);
        Self {
            container,
            content_size,
            position: Vector::new(0.0, 0.0),
            animation: None,
            now: Instant::now(),
            anchors: Vec::new(),
            bindings,
            controls,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, selector: &str, bounds: Rectangle) -> Self {
        self.anchors.push(Anchor {
            selector: selector.to_string(),
            bounds,
        });
        self
    }

    /// Follows a window resize: the container fills the window and the
    /// controls stay pinned to its corners.
    pub fn resize(&mut self, window: Size) {
        self.container = Rectangle::new(Point::ORIGIN, window);
        self.controls = layout_controls(self.container, &self.bindings);
    }

    /// Moves the animation clock to `now`, finishing the animation once its
    /// duration has elapsed.
    pub fn advance(&mut self, now: Instant) {
        self.now = now;
        if let Some(animation) = self.animation {
            if animation.progress(now) >= 1.0 {
                self.position = animation.to;
                self.animation = None;
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// What a pointer press at `point` lands on. Controls are checked
    /// topmost first.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Target {
        if let Some(widget) = self
            .controls
            .iter()
            .rev()
            .find(|widget| widget_contains(widget, point))
        {
            return Target::Control(widget.control.clone());
        }
        if self.content_bounds().contains(point) {
            Target::Content
        } else if self.container.contains(point) {
            Target::Container
        } else {
            Target::Outside
        }
    }

    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[must_use]
    pub fn controls(&self) -> &[ControlWidget] {
        &self.controls
    }

    /// Bounds of an anchor in window coordinates.
    #[must_use]
    pub fn anchor_bounds(&self, anchor: &Anchor) -> Rectangle {
        let origin = self.content_bounds().position();
        Rectangle::new(
            origin + Vector::new(anchor.bounds.x, anchor.bounds.y),
            anchor.bounds.size(),
        )
    }
}

impl Surface for Scene {
    fn container_bounds(&self) -> Rectangle {
        self.container
    }

    fn content_bounds(&self) -> Rectangle {
        Rectangle::new(
            self.container.position() + self.content_position(),
            self.content_size,
        )
    }

    fn content_position(&self) -> Vector {
        self.animation
            .map_or(self.position, |animation| animation.position(self.now))
    }

    fn set_content_position(&mut self, position: Vector, transition: Transition) {
        match transition {
            Transition::Instant => {
                self.animation = None;
                self.position = position;
            }
            Transition::Animated(duration) => {
                let from = self.content_position();
                self.now = Instant::now();
                self.animation = Some(Animation {
                    from,
                    to: position,
                    started: self.now,
                    duration,
                });
                self.position = from;
            }
        }
    }

    fn query(&self, selector: &str) -> Option<Rectangle> {
        self.anchors
            .iter()
            .find(|anchor| anchor.selector == selector)
            .map(|anchor| self.anchor_bounds(anchor))
            .or_else(|| {
                self.controls
                    .iter()
                    .find(|widget| widget.selector == selector)
                    .map(|widget| widget.bounds)
            })
    }
}

fn widget_contains(widget: &ControlWidget, point: Point) -> bool {
    if widget.round {
        let radius = widget.bounds.width / 2.0;
        point.distance(widget.bounds.center()) <= radius
    } else {
        widget.bounds.contains(point)
    }
}

/// Grid cell (column, row) of a control in the 3x3 button pad.
fn pad_cell(control: &Control) -> Option<(f32, f32)> {
    match control {
        Control::Direction(Direction::UpLeft) => Some((0.0, 0.0)),
        Control::Direction(Direction::Up) => Some((1.0, 0.0)),
        Control::Direction(Direction::UpRight) => Some((2.0, 0.0)),
        Control::Direction(Direction::Left) => Some((0.0, 1.0)),
        Control::Center => Some((1.0, 1.0)),
        Control::Direction(Direction::Right) => Some((2.0, 1.0)),
        Control::Direction(Direction::DownLeft) => Some((0.0, 2.0)),
        Control::Direction(Direction::Down) => Some((1.0, 2.0)),
        Control::Direction(Direction::DownRight) => Some((2.0, 2.0)),
        Control::Circle | Control::Other(_) => None,
    }
}

/// Places the button pad in the bottom-right corner and the circle in the
/// bottom-left corner. Controls without a place are not shown.
fn layout_controls(container: Rectangle, bindings: &[(Control, String)]) -> Vec<ControlWidget> {
    let button = sizing::BUTTON_HEIGHT;
    let pitch = button + spacing::XXS;
    let pad_origin = Point::new(
        container.x + container.width - spacing::MD - 3.0 * pitch + spacing::XXS,
        container.y + container.height - spacing::MD - 3.0 * pitch + spacing::XXS,
    );

    let mut widgets = Vec::new();
    let mut circle = None;

    for (control, selector) in bindings {
        if let Some((column, row)) = pad_cell(control) {
            widgets.push(ControlWidget {
                control: control.clone(),
                selector: selector.clone(),
                bounds: Rectangle::new(
                    pad_origin + Vector::new(column * pitch, row * pitch),
                    Size::new(button, button),
                ),
                round: false,
            });
        } else if *control == Control::Circle {
            let diameter = sizing::CIRCLE_DIAMETER;
            let bounds = Rectangle::new(
                Point::new(
                    container.x + spacing::MD,
                    container.y + container.height - spacing::MD - diameter,
                ),
                Size::new(diameter, diameter),
            );
            circle = Some(ControlWidget {
                control: Control::Circle,
                selector: selector.clone(),
                bounds,
                round: true,
            });
        }
    }

    // The circle goes after the pad, with its knob on top of it
    if let Some(circle) = circle {
        let knob = bindings
            .iter()
            .find(|(control, _)| *control == Control::Center)
            .map(|(_, selector)| ControlWidget {
                control: Control::Center,
                selector: selector.clone(),
                bounds: Rectangle::new(
                    circle.bounds.center()
                        - Vector::new(sizing::CIRCLE_KNOB / 2.0, sizing::CIRCLE_KNOB / 2.0),
                    Size::new(sizing::CIRCLE_KNOB, sizing::CIRCLE_KNOB),
                ),
                round: true,
            });
        widgets.push(circle);
        widgets.extend(knob);
    }

    widgets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn scene() -> Scene {
        Scene::new(
            Size::new(800.0, 600.0),
            Size::new(2000.0, 1500.0),
            &default_bindings(),
        )
        .with_anchor(
            "#center",
            Rectangle::new(Point::new(1000.0, 700.0), Size::new(40.0, 40.0)),
        )
    }

    #[test]
    fn swing_eases_between_zero_and_one() {
        assert_abs_diff_eq!(swing(0.0), 0.0);
        assert_abs_diff_eq!(swing(0.5), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(swing(1.0), 1.0, epsilon = 1e-6);
        assert!(swing(0.25) < 0.25);
    }

    #[test]
    fn default_bindings_cover_every_control() {
        let bindings = default_bindings();
        assert_eq!(bindings.len(), 10);
        assert!(bindings
            .iter()
            .any(|(c, s)| *c == Control::Direction(Direction::UpRight) && s == "#pan-up-right"));
    }

    #[test]
    fn instant_moves_apply_immediately() {
        let mut scene = scene();
        scene.set_content_position(Vector::new(-120.0, 45.0), Transition::Instant);
        assert_eq!(scene.content_position(), Vector::new(-120.0, 45.0));
        assert!(!scene.is_animating());
        assert_eq!(scene.content_bounds().position(), Point::new(-120.0, 45.0));
    }

    #[test]
    fn animated_moves_finish_after_their_duration() {
        let mut scene = scene();
        scene.set_content_position(
            Vector::new(-400.0, 0.0),
            Transition::Animated(Duration::from_millis(500)),
        );
        assert!(scene.is_animating());
        assert_eq!(scene.content_position(), Vector::new(0.0, 0.0));

        scene.advance(Instant::now() + Duration::from_secs(1));
        assert!(!scene.is_animating());
        assert_eq!(scene.content_position(), Vector::new(-400.0, 0.0));
    }

    #[test]
    fn query_resolves_anchors_relative_to_content() {
        let mut scene = scene();
        scene.set_content_position(Vector::new(-100.0, -50.0), Transition::Instant);
        let bounds = scene.query("#center").unwrap();
        assert_eq!(bounds.position(), Point::new(900.0, 650.0));
        assert!(scene.query("#nothing").is_none());
    }

    #[test]
    fn hit_test_prefers_controls_over_content() {
        let scene = scene();
        let circle = scene.query("#pan-circle").unwrap();
        let right = scene.query("#pan-right").unwrap();

        assert_eq!(
            scene.hit_test(circle.center()),
            Target::Control(Control::Center)
        );
        assert_eq!(
            scene.hit_test(circle.center() + Vector::new(0.0, 50.0)),
            Target::Control(Control::Circle)
        );
        assert_eq!(
            scene.hit_test(right.center()),
            Target::Control(Control::Direction(Direction::Right))
        );
        assert_eq!(scene.hit_test(Point::new(300.0, 200.0)), Target::Content);
    }

    #[test]
    fn hit_test_distinguishes_container_and_outside() {
        let mut scene = scene();
        scene.set_content_position(Vector::new(500.0, 500.0), Transition::Instant);
        assert_eq!(scene.hit_test(Point::new(100.0, 100.0)), Target::Container);
        assert_eq!(scene.hit_test(Point::new(-5.0, 100.0)), Target::Outside);
    }

    #[test]
    fn resize_keeps_controls_pinned_to_corners() {
        let mut scene = scene();
        scene.resize(Size::new(1200.0, 900.0));
        let down_right = scene.query("#pan-down-right").unwrap();
        assert_abs_diff_eq!(down_right.x + down_right.width, 1200.0 - spacing::MD);
        assert_abs_diff_eq!(down_right.y + down_right.height, 900.0 - spacing::MD);
    }

    #[test]
    fn unplaced_controls_are_skipped() {
        let scene = Scene::new(
            Size::new(800.0, 600.0),
            Size::new(100.0, 100.0),
            &[(Control::Other("zoom".to_string()), "#zoom".to_string())],
        );
        assert!(scene.controls().is_empty());
    }
}
