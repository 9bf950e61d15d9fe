// SPDX-License-Identifier: MPL-2.0
//! The panner: owns the offset and routes input to the active session.
//!
//! Exactly one session runs at a time. A drag, a keyboard or button hold, or
//! a circle hold can only begin while the panner is idle; input that would
//! start a second session is ignored until the first one ends.

use super::circle::Circle;
use super::controls::{key_direction, Continuous, Control};
use super::drag::DragState;
use super::offset::Offset;
use super::surface::{Surface, Target, Transition};
use super::ControlEvent;
use crate::config::defaults::{
    DEFAULT_CENTER_DURATION_MS, DEFAULT_CENTER_SELECTOR, DEFAULT_FPS, DEFAULT_SPEED,
};
use iced::keyboard::Key;
use iced::{Point, Rectangle, Vector};
use std::time::Duration;

/// Runtime settings of a panner.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Selector of the element to bring to the container's center. When unset
    /// or unmatched, the content centers itself.
    pub content_center: Option<String>,
    /// Frames per second of continuous movement.
    pub fps: u32,
    /// Continuous movement speed in pixels per second.
    pub speed: f32,
    /// On-screen controls and the selectors of the elements bound to them.
    pub controls: Vec<(Control, String)>,
    /// Duration of the animated move performed by [`Panner::center`].
    pub center_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content_center: Some(DEFAULT_CENTER_SELECTOR.to_string()),
            fps: DEFAULT_FPS,
            speed: DEFAULT_SPEED,
            controls: Vec::new(),
            center_duration: Duration::from_millis(DEFAULT_CENTER_DURATION_MS),
        }
    }
}

impl Settings {
    /// Selector bound to `control`, if any.
    #[must_use]
    pub fn selector(&self, control: &Control) -> Option<&str> {
        self.controls
            .iter()
            .find(|(bound, _)| bound == control)
            .map(|(_, selector)| selector.as_str())
    }
}

/// What started a continuous-move session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A held arrow or WASD key; ends on key release.
    Keyboard,
    /// A held direction button or a programmatic trigger; ends on pointer
    /// release.
    Button,
}

/// The single interaction currently in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Idle,
    Dragging(DragState),
    Controlling(Source),
    CircleControlling,
}

impl Session {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Session::Idle)
    }
}

/// Input delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Primary pointer button pressed at `position` over `target`.
    PointerPressed { position: Point, target: Target },
    /// Pointer moved anywhere in the window.
    PointerMoved(Point),
    /// Primary pointer button released anywhere.
    PointerReleased,
    KeyPressed(Key),
    KeyReleased(Key),
    /// One frame of continuous movement elapsed.
    Tick,
    /// Re-center the content.
    Center,
}

/// Outcome of handling one [`Input`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Control events raised while handling the input, in order.
    pub events: Vec<ControlEvent>,
    /// Whether the host should treat the input as consumed.
    pub captured: bool,
}

/// Reported to the pan callback after every position update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    /// Displacement just applied.
    pub delta: Vector,
    /// Offset after applying it.
    pub position: Offset,
}

type PanCallback = Box<dyn FnMut(&PanEvent) + Send>;

/// Pans the content of a [`Surface`].
pub struct Panner<S> {
    surface: S,
    settings: Settings,
    offset: Offset,
    focused: bool,
    session: Session,
    continuous: Continuous,
    circle: Circle,
    on_pan: Option<PanCallback>,
}

impl<S: Surface> Panner<S> {
    pub fn new(surface: S, settings: Settings) -> Self {
        let offset = Offset::from_live(surface.content_position());
        let continuous = Continuous::new(settings.fps, settings.speed);
        Self {
            surface,
            settings,
            offset,
            focused: false,
            session: Session::Idle,
            continuous,
            circle: Circle::default(),
            on_pan: None,
        }
    }

    /// Registers a callback run after every position update.
    #[must_use]
    pub fn on_pan(mut self, callback: impl FnMut(&PanEvent) + Send + 'static) -> Self {
        self.on_pan = Some(Box::new(callback));
        self
    }

    pub fn handle(&mut self, input: Input) -> Response {
        let mut response = Response::default();
        match input {
            Input::PointerPressed { position, target } => {
                self.pointer_pressed(position, target, &mut response);
            }
            Input::PointerMoved(position) => self.pointer_moved(position, &mut response),
            Input::PointerReleased => self.pointer_released(&mut response),
            Input::KeyPressed(key) => self.key_pressed(&key, &mut response),
            Input::KeyReleased(_) => {
                // Any key release ends a keyboard session, not only the held key
                if self.session == Session::Controlling(Source::Keyboard) {
                    response.captured = true;
                    self.raise(ControlEvent::Up, Source::Keyboard, &mut response);
                }
            }
            Input::Tick => {
                if let Some(step) = self.continuous.tick() {
                    self.update_position(step, false);
                }
            }
            Input::Center => self.raise(ControlEvent::Center, Source::Button, &mut response),
        }
        response
    }

    /// Raises a control event as if an on-screen button produced it.
    pub fn trigger(&mut self, event: ControlEvent) -> Response {
        let mut response = Response::default();
        self.raise(event, Source::Button, &mut response);
        response
    }

    /// Ends whatever session is running without raising events.
    ///
    /// Hosts call this when they stop receiving input, e.g. when the window
    /// loses focus and a key release would never arrive.
    pub fn cancel(&mut self) {
        if !self.session.is_idle() {
            tracing::debug!(session = ?self.session, "pan session cancelled");
        }
        self.continuous.stop();
        self.circle.release();
        self.session = Session::Idle;
    }

    /// Re-reads the offset from the live content position.
    pub fn refresh_offset(&mut self) {
        self.offset = Offset::from_live(self.surface.content_position());
    }

    /// Shifts the offset by `delta` and moves the content there.
    ///
    /// Panning is unbounded: the content can be moved arbitrarily far out of
    /// the container.
    pub fn update_position(&mut self, delta: Vector, animate: bool) {
        let position = self.offset.shift(delta);
        let transition = if animate {
            Transition::Animated(self.settings.center_duration)
        } else {
            Transition::Instant
        };

        tracing::trace!(dx = delta.x, dy = delta.y, x = position.x, y = position.y, "pan");
        self.surface
            .set_content_position(position.as_vector(), transition);

        if let Some(on_pan) = self.on_pan.as_mut() {
            on_pan(&PanEvent { delta, position });
        }
    }

    /// Moves the content, animated, so that the center target lines up with
    /// the container's center.
    pub fn center(&mut self) {
        let container = self.surface.container_bounds();
        let target = self
            .settings
            .content_center
            .as_deref()
            .and_then(|selector| self.surface.query(selector))
            .unwrap_or_else(|| self.surface.content_bounds());

        let container_center = Vector::new(container.width / 2.0, container.height / 2.0);
        let target_center = Vector::new(
            target.x - container.x + target.width / 2.0,
            target.y - container.y + target.height / 2.0,
        );

        self.refresh_offset();
        self.update_position(container_center - target_center, true);
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the last pointer press landed inside the container.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the host should be delivering [`Input::Tick`].
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.continuous.is_active()
    }

    /// Interval between two [`Input::Tick`] deliveries.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.continuous.frame_interval()
    }

    /// Per-frame displacement of the current or last continuous session.
    #[must_use]
    pub fn frame_vector(&self) -> Vector {
        self.continuous.vector()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn pointer_pressed(&mut self, position: Point, target: Target, response: &mut Response) {
        self.focused = target.is_within_container();

        match target {
            Target::Control(Control::Center) => {
                response.captured = true;
                self.raise(ControlEvent::Center, Source::Button, response);
            }
            _ if !self.session.is_idle() => {}
            Target::Container | Target::Content => {
                response.captured = true;
                self.refresh_offset();
                self.session = Session::Dragging(DragState::new());
                tracing::debug!(x = self.offset.x, y = self.offset.y, "drag started");
            }
            Target::Control(Control::Circle) => {
                if let Some(bounds) = self.control_bounds(&Control::Circle) {
                    response.captured = true;
                    let event = self.circle.press(position, bounds);
                    self.raise_circle(event, response);
                }
            }
            Target::Control(control) => {
                response.captured = true;
                self.raise(ControlEvent::Down(control.ratio(), None), Source::Button, response);
            }
            Target::Outside => {}
        }
    }

    fn pointer_moved(&mut self, position: Point, response: &mut Response) {
        let container_origin = self.surface.container_bounds().position();

        match &mut self.session {
            Session::Dragging(drag) => {
                let delta = drag.drag_to(Point::ORIGIN + (position - container_origin));
                response.captured = true;
                self.update_position(delta, false);
            }
            Session::CircleControlling => {
                let change = self
                    .control_bounds(&Control::Circle)
                    .and_then(|bounds| self.circle.moved(position, bounds));
                if let Some(event) = change {
                    response.captured = true;
                    self.raise_circle(event, response);
                }
            }
            Session::Idle | Session::Controlling(_) => {}
        }
    }

    fn pointer_released(&mut self, response: &mut Response) {
        match self.session {
            Session::Dragging(_) => {
                tracing::debug!(x = self.offset.x, y = self.offset.y, "drag ended");
                self.session = Session::Idle;
            }
            Session::CircleControlling => {
                if let Some(event) = self.circle.release() {
                    self.raise_circle(event, response);
                }
            }
            Session::Controlling(Source::Button) => {
                self.raise(ControlEvent::Up, Source::Button, response);
            }
            Session::Idle | Session::Controlling(Source::Keyboard) => {}
        }
    }

    fn key_pressed(&mut self, key: &Key, response: &mut Response) {
        if !self.focused {
            return;
        }
        let Some(direction) = key_direction(key) else {
            return;
        };

        response.captured = true;
        // Auto-repeat keeps firing presses; only the first one starts a session
        if self.session.is_idle() {
            self.raise(
                ControlEvent::Down(direction.ratio(), None),
                Source::Keyboard,
                response,
            );
        }
    }

    fn raise_circle(&mut self, event: ControlEvent, response: &mut Response) {
        response.events.push(event);
        self.dispatch(event, Session::CircleControlling);
    }

    fn raise(&mut self, event: ControlEvent, source: Source, response: &mut Response) {
        response.events.push(event);
        self.dispatch(event, Session::Controlling(source));
    }

    fn dispatch(&mut self, event: ControlEvent, session: Session) {
        match event {
            ControlEvent::Down(ratio, speed) => {
                if !self.session.is_idle() {
                    tracing::debug!(busy = ?self.session, "control down ignored");
                    return;
                }
                self.continuous.set_control(ratio, speed);
                self.refresh_offset();
                self.continuous.start();
                tracing::debug!(?session, x = ratio.x, y = ratio.y, "continuous pan started");
                self.session = session;

                // The first step lands right away so a short tap still moves
                if let Some(step) = self.continuous.tick() {
                    self.update_position(step, false);
                }
            }
            ControlEvent::Change(ratio, speed) => {
                if self.continuous.is_active() {
                    self.continuous.set_control(ratio, speed);
                }
            }
            ControlEvent::Up => {
                if self.continuous.stop() {
                    tracing::debug!(session = ?self.session, "continuous pan stopped");
                    self.circle.release();
                    self.session = Session::Idle;
                }
            }
            ControlEvent::Center => self.center(),
        }
    }

    fn control_bounds(&self, control: &Control) -> Option<Rectangle> {
        self.settings
            .selector(control)
            .and_then(|selector| self.surface.query(selector))
    }
}
