// SPDX-License-Identifier: MPL-2.0
//! Demo application: a window-sized viewport over a large grid.
//!
//! The `App` struct translates iced window events into panner input, keeps the
//! last cursor position for hit testing presses, and returns the subscriptions
//! that feed continuous movement and animation frames.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::pan::{Input, Panner};
use crate::ui::scene::{self, Scene};
use crate::ui::scene_view::SceneView;
use iced::widget::{canvas, container, text, Stack};
use iced::{keyboard, mouse, window, Element, Length, Point, Rectangle, Size, Subscription, Task};

const INITIAL_WINDOW_SIZE: Size = Size::new(960.0, 720.0);
const CONTENT_SIZE: Size = Size::new(2400.0, 1800.0);
const CENTER_MARKER: Rectangle = Rectangle {
    x: 1180.0,
    y: 880.0,
    width: 40.0,
    height: 40.0,
};

/// Launches the demo.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window_size(INITIAL_WINDOW_SIZE)
        .subscription(App::subscription)
        .run()
}

/// Root application state.
pub struct App {
    panner: Panner<Scene>,
    cursor: Point,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let mut config = loaded.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default configuration");
            Config::default()
        });

        if flags.fps.is_some() {
            config.fps = flags.fps;
        }
        if flags.speed.is_some() {
            config.speed = flags.speed;
        }

        let mut settings = config.to_settings();
        if settings.controls.is_empty() {
            settings.controls = scene::default_bindings();
        }

        let scene = Scene::new(INITIAL_WINDOW_SIZE, CONTENT_SIZE, &settings.controls)
            .with_anchor(crate::config::DEFAULT_CENTER_SELECTOR, CENTER_MARKER);

        tracing::info!(fps = settings.fps, speed = settings.speed, "starting pan demo");
        let panner = Panner::new(scene, settings).on_pan(|event| {
            tracing::trace!(
                dx = event.delta.x,
                dy = event.delta.y,
                x = event.position.x,
                y = event.position.y,
                "content panned"
            );
        });

        let mut app = App {
            panner,
            cursor: Point::ORIGIN,
        };
        app.panner.handle(Input::Center);

        (app, Task::none())
    }

    fn title(&self) -> String {
        let offset = self.panner.offset();
        format!("IcedPan ({:.0}, {:.0})", offset.x, offset.y)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.panner.is_moving(),
                self.panner.frame_interval(),
            ),
            subscription::create_frame_subscription(self.panner.surface().is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let input = match message {
            Message::Event(event) => self.translate(event),
            Message::Tick(_) => Some(Input::Tick),
            Message::Frame(now) => {
                self.panner.surface_mut().advance(now);
                None
            }
        };

        if let Some(input) = input {
            let response = self.panner.handle(input);
            if !response.events.is_empty() {
                tracing::debug!(events = ?response.events, "control events");
            }
        }

        Task::none()
    }

    /// Turns a window event into panner input, updating local state on the way.
    fn translate(&mut self, event: iced::Event) -> Option<Input> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = position;
                Some(Input::PointerMoved(position))
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Input::PointerPressed {
                    position: self.cursor,
                    target: self.panner.surface().hit_test(self.cursor),
                })
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Input::PointerReleased)
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Home),
                ..
            }) => Some(Input::Center),
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Some(Input::KeyPressed(key))
            }
            iced::Event::Keyboard(keyboard::Event::KeyReleased { key, .. }) => {
                Some(Input::KeyReleased(key))
            }
            iced::Event::Window(window::Event::Resized(size)) => {
                self.panner.surface_mut().resize(size);
                None
            }
            iced::Event::Window(window::Event::Unfocused) => {
                // Key releases are not delivered to unfocused windows
                self.panner.cancel();
                None
            }
            _ => None,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let scene = canvas(SceneView::new(self.panner.surface(), self.panner.session()))
            .width(Length::Fill)
            .height(Length::Fill);

        let offset = self.panner.offset();
        let status = text(format!(
            "offset ({:.0}, {:.0})  ·  drag, arrows/WASD, buttons or circle  ·  Home to center",
            offset.x, offset.y
        ))
        .size(crate::ui::design_tokens::typography::BODY);

        Stack::new()
            .push(scene)
            .push(container(status).padding(crate::ui::design_tokens::spacing::XS))
            .into()
    }

    #[cfg(test)]
    fn panner(&self) -> &Panner<Scene> {
        &self.panner
    }
}
