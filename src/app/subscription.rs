// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Each subscription only exists while it is needed: iced drops a subscription
//! as soon as it is no longer returned, which is how the frame timer of a
//! stopped pan session gets cancelled.

use super::Message;
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Routes pointer, keyboard and the relevant window events to the app.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let wanted = matches!(
            event,
            Event::Mouse(
                mouse::Event::CursorMoved { .. }
                    | mouse::Event::ButtonPressed(mouse::Button::Left)
                    | mouse::Event::ButtonReleased(mouse::Button::Left)
            ) | Event::Keyboard(_)
                | Event::Window(window::Event::Resized(_) | window::Event::Unfocused)
        );
        wanted.then_some(Message::Event(event))
    })
}

/// Frame timer of continuous panning, present only while a session moves.
pub fn create_tick_subscription(moving: bool, interval: Duration) -> Subscription<Message> {
    if moving {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Animation frames, present only while the content is easing.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
