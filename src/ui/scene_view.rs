// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for a [`Scene`].

use crate::pan::{Control, Session, Surface};
use crate::ui::design_tokens::{border, opacity, palette, sizing, typography};
use crate::ui::scene::{ControlWidget, Scene};
use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};

/// Draws the content grid, its anchors and the controls.
///
/// Input is handled by the application through window events, so this
/// program only draws.
pub struct SceneView<'a> {
    scene: &'a Scene,
    session: &'a Session,
}

impl<'a> SceneView<'a> {
    #[must_use]
    pub fn new(scene: &'a Scene, session: &'a Session) -> Self {
        Self { scene, session }
    }

    fn is_engaged(&self, widget: &ControlWidget) -> bool {
        *self.session == Session::CircleControlling && widget.control == Control::Circle
    }

    fn draw_content(&self, frame: &mut Frame) {
        let content = self.scene.content_bounds();
        let visible = match content.intersection(&self.scene.container_bounds()) {
            Some(visible) => visible,
            None => return,
        };

        frame.fill_rectangle(content.position(), content.size(), palette::GRAY_100);

        let grid = Stroke::default()
            .with_width(border::WIDTH_SM)
            .with_color(palette::GRAY_200);
        let step = sizing::GRID_STEP;

        // Only lines crossing the visible part of the content
        let first_column = ((visible.x - content.x) / step).floor().max(0.0) as u32;
        let last_column = ((visible.x + visible.width - content.x) / step).ceil() as u32;
        for column in first_column..=last_column {
            let x = content.x + column as f32 * step;
            if x > content.x + content.width {
                break;
            }
            frame.stroke(
                &Path::line(Point::new(x, visible.y), Point::new(x, visible.y + visible.height)),
                grid.clone(),
            );
            frame.fill_text(Text {
                content: format!("{}", column as f32 * step),
                position: Point::new(x + 4.0, visible.y + 4.0),
                color: palette::GRAY_400,
                size: typography::CAPTION.into(),
                ..Text::default()
            });
        }

        let first_row = ((visible.y - content.y) / step).floor().max(0.0) as u32;
        let last_row = ((visible.y + visible.height - content.y) / step).ceil() as u32;
        for row in first_row..=last_row {
            let y = content.y + row as f32 * step;
            if y > content.y + content.height {
                break;
            }
            frame.stroke(
                &Path::line(Point::new(visible.x, y), Point::new(visible.x + visible.width, y)),
                grid.clone(),
            );
        }

        for anchor in self.scene.anchors() {
            let bounds = self.scene.anchor_bounds(anchor);
            frame.fill(
                &Path::circle(bounds.center(), bounds.width.min(bounds.height) / 2.0),
                palette::WARNING_500,
            );
            frame.fill_text(Text {
                content: anchor.selector.clone(),
                position: Point::new(bounds.x, bounds.y + bounds.height + 4.0),
                color: palette::GRAY_900,
                size: typography::BODY.into(),
                ..Text::default()
            });
        }
    }

    fn draw_control(&self, frame: &mut Frame, widget: &ControlWidget) {
        let fill = if self.is_engaged(widget) {
            Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::PRIMARY_700
            }
        } else {
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_900
            }
        };
        let outline = Stroke::default()
            .with_width(border::WIDTH_MD)
            .with_color(palette::PRIMARY_200);

        let path = if widget.round {
            Path::circle(widget.bounds.center(), widget.bounds.width / 2.0)
        } else {
            Path::rectangle(widget.bounds.position(), widget.bounds.size())
        };
        frame.fill(&path, fill);
        frame.stroke(&path, outline);

        match &widget.control {
            Control::Direction(direction) => {
                // Small tick pointing the way the content moves
                let ratio = direction.ratio();
                let center = widget.bounds.center();
                let reach = widget.bounds.width / 3.0;
                frame.stroke(
                    &Path::line(center, center + ratio * (reach * 2.0)),
                    Stroke::default()
                        .with_width(border::WIDTH_MD)
                        .with_color(palette::WHITE),
                );
            }
            Control::Center => {
                frame.fill(
                    &Path::circle(widget.bounds.center(), widget.bounds.width / 6.0),
                    palette::SUCCESS_500,
                );
            }
            Control::Circle => {
                frame.fill(
                    &Path::circle(widget.bounds.center(), widget.bounds.width / 2.0),
                    Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..palette::PRIMARY_500
                    },
                );
            }
            Control::Other(_) => {}
        }
    }
}

impl<Message> canvas::Program<Message> for SceneView<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(bounds.width, bounds.height),
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_700
            },
        );
        self.draw_content(&mut frame);
        for widget in self.scene.controls() {
            self.draw_control(&mut frame, widget);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if matches!(self.session, Session::Dragging(_)) {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        }
    }
}
