//! Countdown label and settings button.

use eframe::egui::{
    self, Color32, CornerRadius, FontId, Id, PointerButton, Pos2, Rect, RichText, Sense, Stroke,
    Vec2, ViewportCommand,
};

use crate::countdown::{label_width, CountdownSurface};
use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::*;

const SETTINGS_BUTTON_TEXT: &str = "⚙ Settings";

/// Where the label and button sit inside the overlay window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub label: Rect,
    pub button: Rect,
}

impl OverlayLayout {
    /// Stack the label and the button, horizontally centered in `area`.
    ///
    /// The label keeps its natural width unless `area` is narrower.
    pub fn compute(area: Rect, text_size: Vec2) -> Self {
        let label_size = Vec2::new(
            label_width(text_size.x).min(area.width()),
            text_size.y + 2.0 * LABEL_PADDING,
        );
        let label = Rect::from_min_size(
            Pos2::new(area.center().x - label_size.x / 2.0, area.top() + OVERLAY_MARGIN),
            label_size,
        );

        let (bw, bh) = SETTINGS_BUTTON_SIZE;
        let button = Rect::from_min_size(
            Pos2::new(area.center().x - bw / 2.0, label.bottom() + OVERLAY_SPACING),
            Vec2::new(bw, bh),
        );

        Self { label, button }
    }
}

fn rgba((r, g, b, a): (u8, u8, u8, u8)) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Draw the overlay for the current frame.
///
/// Returns the natural label width (text plus padding) so the caller can
/// size the window.
pub fn show_overlay(ctx: &egui::Context, surface: &CountdownSurface, publisher: &EventPublisher) -> f32 {
    let config = surface.config();
    let mut natural_width = 0.0;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let area = ui.max_rect();

            let background = ui.interact(area, Id::new("overlay_background"), Sense::click_and_drag());
            if background.drag_started_by(PointerButton::Primary) {
                ctx.send_viewport_cmd(ViewportCommand::StartDrag);
            }
            background.context_menu(|ui| {
                if ui.button("Settings…").clicked() {
                    publisher.publish(AppEvent::OpenSettings);
                    ui.close();
                }
                if ui.button("Quit").clicked() {
                    publisher.publish(AppEvent::RequestQuit);
                    ui.close();
                }
            });

            let painter = ui.painter();
            let galley = painter.layout_no_wrap(
                surface.text().to_owned(),
                FontId::proportional(config.font_size as f32),
                config.text_fill(),
            );
            natural_width = label_width(galley.size().x);

            let layout = OverlayLayout::compute(area, galley.size());
            painter.rect_filled(
                layout.label,
                CornerRadius::same(LABEL_CORNER_RADIUS),
                config.background_fill(),
            );
            let text_pos = layout.label.center() - galley.size() / 2.0;
            painter.galley(text_pos, galley, config.text_fill());

            let fill = if ui.rect_contains_pointer(layout.button) {
                rgba(SETTINGS_BUTTON_HOVER_FILL)
            } else {
                rgba(SETTINGS_BUTTON_FILL)
            };
            let button = egui::Button::new(RichText::new(SETTINGS_BUTTON_TEXT).color(Color32::WHITE))
                .fill(fill)
                .stroke(Stroke::NONE)
                .corner_radius(CornerRadius::same((SETTINGS_BUTTON_SIZE.1 / 2.0) as u8));
            if ui.put(layout.button, button).clicked() {
                publisher.publish(AppEvent::OpenSettings);
            }
        });

    natural_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(w: f32) -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(w, WINDOW_HEIGHT))
    }

    #[test]
    fn label_is_centered_with_padding() {
        let layout = OverlayLayout::compute(window(400.0), Vec2::new(200.0, 50.0));
        assert_eq!(layout.label.width(), 240.0);
        assert_eq!(layout.label.height(), 90.0);
        assert_eq!(layout.label.center().x, 200.0);
        assert_eq!(layout.label.top(), OVERLAY_MARGIN);
    }

    #[test]
    fn button_sits_below_label() {
        let layout = OverlayLayout::compute(window(400.0), Vec2::new(200.0, 50.0));
        assert_eq!(layout.button.top(), layout.label.bottom() + OVERLAY_SPACING);
        assert_eq!(layout.button.size(), Vec2::new(100.0, 40.0));
        assert_eq!(layout.button.center().x, 200.0);
    }

    #[test]
    fn label_never_exceeds_window() {
        let layout = OverlayLayout::compute(window(800.0), Vec2::new(900.0, 50.0));
        assert_eq!(layout.label.width(), 800.0);
    }
}
