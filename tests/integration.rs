// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Rectangle, Size, Vector};
use iced_pan::config::{self, Binding, Config};
use iced_pan::pan::{
    Control, ControlEvent, Direction, Input, Offset, Panner, Session, Surface, Target, Transition,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

/// Minimal host: a container at the origin holding one large content block.
struct Viewport {
    container: Size,
    content: Size,
    position: Vector,
    elements: Vec<(String, Rectangle)>,
    last_transition: Option<Transition>,
}

impl Viewport {
    fn new() -> Self {
        Self {
            container: Size::new(400.0, 300.0),
            content: Size::new(1000.0, 800.0),
            position: Vector::new(0.0, 0.0),
            elements: vec![(
                "#circle".to_string(),
                Rectangle::new(Point::new(0.0, 200.0), Size::new(100.0, 100.0)),
            )],
            last_transition: None,
        }
    }
}

impl Surface for Viewport {
    fn container_bounds(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.container)
    }

    fn content_bounds(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN + self.position, self.content)
    }

    fn content_position(&self) -> Vector {
        self.position
    }

    fn set_content_position(&mut self, position: Vector, transition: Transition) {
        self.position = position;
        self.last_transition = Some(transition);
    }

    fn query(&self, selector: &str) -> Option<Rectangle> {
        self.elements
            .iter()
            .find(|(name, _)| name == selector)
            .map(|(_, bounds)| *bounds)
    }
}

fn config_from_file(config: &Config) -> Config {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    config::save_to_path(config, &path).expect("Failed to write config file");
    config::load_from_path(&path).expect("Failed to load config file")
}

#[test]
fn configured_button_pans_at_configured_speed() {
    let mut controls = std::collections::BTreeMap::new();
    controls.insert("up".to_string(), Binding::Selector("#north".to_string()));
    controls.insert("circle".to_string(), Binding::Enabled(false));
    let config = config_from_file(&Config {
        fps: Some(10),
        speed: Some(100.0),
        controls,
        ..Config::default()
    });

    let settings = config.to_settings();
    assert_eq!(settings.selector(&Control::from(Direction::Up)), Some("#north"));
    assert_eq!(settings.selector(&Control::Circle), None);

    let mut panner = Panner::new(Viewport::new(), settings);
    let response = panner.handle(Input::PointerPressed {
        position: Point::new(380.0, 20.0),
        target: Target::Control(Control::Direction(Direction::Up)),
    });
    assert_eq!(
        response.events,
        vec![ControlEvent::Down(Vector::new(0.0, -1.0), None)]
    );
    assert_eq!(panner.frame_interval(), Duration::from_millis(100));

    // First step on press, one more per frame
    assert_eq!(panner.offset(), Offset::new(0.0, -10.0));
    panner.handle(Input::Tick);
    panner.handle(Input::Tick);
    assert_eq!(panner.offset(), Offset::new(0.0, -30.0));

    let response = panner.handle(Input::PointerReleased);
    assert_eq!(response.events, vec![ControlEvent::Up]);
    assert!(panner.session().is_idle());
    assert!(!panner.is_moving());
}

#[test]
fn circle_steers_while_held() {
    let mut controls = std::collections::BTreeMap::new();
    controls.insert("circle".to_string(), Binding::Selector("#circle".to_string()));
    let mut panner = Panner::new(
        Viewport::new(),
        config_from_file(&Config {
            fps: Some(10),
            speed: Some(100.0),
            controls,
            ..Config::default()
        })
        .to_settings(),
    );

    // Right edge of the circle centered at (50, 250)
    let response = panner.handle(Input::PointerPressed {
        position: Point::new(100.0, 250.0),
        target: Target::Control(Control::Circle),
    });
    assert_eq!(
        response.events,
        vec![ControlEvent::Down(Vector::new(1.0, 0.0), None)]
    );
    assert_eq!(*panner.session(), Session::CircleControlling);
    assert_eq!(panner.offset(), Offset::new(10.0, 0.0));

    // Straight below the center
    let response = panner.handle(Input::PointerMoved(Point::new(50.0, 300.0)));
    assert_eq!(
        response.events,
        vec![ControlEvent::Change(Vector::new(0.0, 1.0), None)]
    );

    panner.handle(Input::Tick);
    assert_eq!(panner.offset(), Offset::new(10.0, 10.0));

    let response = panner.handle(Input::PointerReleased);
    assert_eq!(response.events, vec![ControlEvent::Up]);
    assert!(panner.session().is_idle());
}

#[test]
fn centering_without_target_uses_content_center() {
    let settings = config_from_file(&Config {
        content_center: Some(String::new()),
        center_duration_ms: Some(250),
        ..Config::default()
    })
    .to_settings();
    assert_eq!(settings.content_center, None);

    let mut panner = Panner::new(Viewport::new(), settings);
    panner.handle(Input::Center);

    // Content center (500, 400) onto container center (200, 150)
    assert_eq!(panner.offset(), Offset::new(-300.0, -250.0));
    assert_eq!(
        panner.surface().last_transition,
        Some(Transition::Animated(Duration::from_millis(250)))
    );
}

#[test]
fn pan_callback_sees_every_drag_step() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut panner = Panner::new(Viewport::new(), Config::default().to_settings())
        .on_pan(move |event| sink.lock().expect("poisoned").push(event.position));

    panner.handle(Input::PointerPressed {
        position: Point::new(200.0, 100.0),
        target: Target::Content,
    });
    for position in [
        Point::new(200.0, 100.0),
        Point::new(210.0, 90.0),
        Point::new(230.0, 95.0),
    ] {
        panner.handle(Input::PointerMoved(position));
    }
    panner.handle(Input::PointerReleased);

    let seen = seen.lock().expect("poisoned");
    assert_eq!(
        *seen,
        vec![
            Offset::new(0.0, 0.0),
            Offset::new(10.0, -10.0),
            Offset::new(30.0, -5.0),
        ]
    );
    assert_eq!(panner.surface().position, Vector::new(30.0, -5.0));
}
