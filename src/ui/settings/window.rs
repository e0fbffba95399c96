//! Settings window.
//!
//! Shown as a second native viewport next to the overlay. The panel edits a
//! [`SettingsForm`] and publishes [`AppEvent::ApplyConfig`] on a valid save;
//! the overlay commits it and reports back through [`SettingsPanel::report_saved`].

use std::collections::VecDeque;

use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, Align2, DragValue, Id, ViewportBuilder, ViewportCommand, ViewportId};

use super::form::{days_in_month, SettingsForm};
use super::save::SaveOutcome;
use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::*;
use crate::model::{Alignment, CountdownConfig, Rgb, ThemePreset};

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    fn title(self) -> &'static str {
        match self {
            NoticeKind::Info => "Done",
            NoticeKind::Warning => "Warning",
            NoticeKind::Error => "Invalid input",
        }
    }
}

/// A modal message inside the settings window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Close the panel once the user acknowledges this notice.
    pub close_on_ack: bool,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            close_on_ack: false,
        }
    }
}

/// The settings panel. At most one exists at a time.
pub struct SettingsPanel {
    form: SettingsForm,
    /// Month shown by the calendar (year, month).
    calendar: (i32, u32),
    notices: VecDeque<Notice>,
    focus_requested: bool,
    position: Option<egui::Pos2>,
    publisher: EventPublisher,
}

impl SettingsPanel {
    pub fn viewport_id() -> ViewportId {
        ViewportId::from_hash_of("settings")
    }

    /// Open over a snapshot of `config`, centered on a monitor of
    /// `monitor_size` when known.
    pub fn new(
        config: &CountdownConfig,
        monitor_size: Option<egui::Vec2>,
        publisher: EventPublisher,
    ) -> Self {
        let form = SettingsForm::from_config(config);
        let (w, h) = SETTINGS_SIZE;
        let position = monitor_size.map(|m| egui::pos2((m.x - w) / 2.0, (m.y - h) / 2.0).max(egui::Pos2::ZERO));
        Self {
            calendar: (form.year, form.month),
            form,
            notices: VecDeque::new(),
            focus_requested: false,
            position,
            publisher,
        }
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Bring the existing window to the front on the next frame.
    pub fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    /// Queue the post-save notices: the autostart warning (if any), then the
    /// confirmation that closes the panel.
    pub fn report_saved(&mut self, outcome: &SaveOutcome) {
        if let Some(message) = outcome.warning_message() {
            self.notices.push_back(Notice::new(NoticeKind::Warning, message));
        }
        self.notices.push_back(Notice {
            close_on_ack: true,
            ..Notice::new(NoticeKind::Info, "Settings saved!")
        });
    }

    /// Validate and hand the config to the overlay, or queue an error notice.
    pub fn submit(&mut self) {
        match self.form.validate() {
            Ok(config) => self.publisher.publish(AppEvent::ApplyConfig(Box::new(config))),
            Err(e) => {
                tracing::debug!(error = %e, "settings rejected");
                self.notices.push_back(Notice::new(NoticeKind::Error, e.to_string()));
            }
        }
    }

    /// Acknowledge the front notice.
    pub fn acknowledge(&mut self) {
        if let Some(notice) = self.notices.pop_front() {
            if notice.close_on_ack {
                self.publisher.publish(AppEvent::SettingsClosed);
            }
        }
    }

    pub fn cancel(&self) {
        self.publisher.publish(AppEvent::SettingsClosed);
    }

    /// Draw the panel viewport. Call once per overlay frame while open.
    pub fn show(&mut self, ctx: &egui::Context) {
        let (w, h) = SETTINGS_SIZE;
        let (min_w, min_h) = SETTINGS_MIN_SIZE;
        let mut builder = ViewportBuilder::default()
            .with_title(SETTINGS_TITLE)
            .with_inner_size([w, h])
            .with_min_inner_size([min_w, min_h]);
        if let Some(pos) = self.position {
            builder = builder.with_position(pos);
        }

        ctx.show_viewport_immediate(Self::viewport_id(), builder, |ctx, _class| {
            if std::mem::take(&mut self.focus_requested) {
                ctx.send_viewport_cmd(ViewportCommand::Focus);
            }
            if ctx.input(|i| i.viewport().close_requested()) {
                self.cancel();
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                let idle = self.notices.is_empty();
                ui.add_enabled_ui(idle, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.form_ui(ui));
                });
            });

            self.notice_ui(ctx);
        });
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Display");
        ui.horizontal(|ui| {
            ui.label("Display text:");
            ui.text_edit_singleline(&mut self.form.display_prefix);
        });

        ui.separator();
        ui.heading("Target time");
        self.target_ui(ui);
        self.calendar_ui(ui);

        ui.separator();
        ui.heading("Appearance");
        color_row(ui, "Background color (R,G,B):", &mut self.form.background);
        color_row(ui, "Text color (R,G,B):", &mut self.form.text_color);

        ui.label(format!("Font size ({}px)", self.form.font_size));
        ui.add(egui::Slider::new(&mut self.form.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE).show_value(false));
        ui.label(format!("Opacity ({})", self.form.background_opacity));
        ui.add(egui::Slider::new(&mut self.form.background_opacity, 0..=u8::MAX).show_value(false));

        ui.horizontal(|ui| {
            ui.label("Theme:");
            for preset in ThemePreset::ALL {
                if ui.button(preset.label()).clicked() {
                    self.form.apply_preset(preset);
                }
            }
        });

        ui.separator();
        ui.heading("Position");
        ui.horizontal(|ui| {
            for alignment in Alignment::ALL {
                ui.radio_value(&mut self.form.alignment, alignment, alignment.label());
            }
        });

        ui.separator();
        ui.heading("Behavior");
        ui.checkbox(&mut self.form.adapt_to_wallpaper, "Adapt text color to wallpaper");
        ui.checkbox(&mut self.form.auto_start, "Start with the system");
        ui.checkbox(&mut self.form.auto_resume, "Resume the countdown at launch");

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                self.submit();
            }
            if ui.button("Cancel").clicked() {
                self.cancel();
            }
        });
    }

    fn target_ui(&mut self, ui: &mut egui::Ui) {
        let before = (self.form.year, self.form.month);
        let last_day = days_in_month(self.form.year, self.form.month).max(1);

        ui.horizontal(|ui| {
            ui.add(DragValue::new(&mut self.form.year).range(1970..=9999));
            ui.label("-");
            ui.add(DragValue::new(&mut self.form.month).range(1..=12));
            ui.label("-");
            ui.add(DragValue::new(&mut self.form.day).range(1..=last_day));
            ui.add_space(12.0);
            ui.add(DragValue::new(&mut self.form.hour).range(0..=23));
            ui.label(":");
            ui.add(DragValue::new(&mut self.form.minute).range(0..=59));
            ui.label(":");
            ui.add(DragValue::new(&mut self.form.second).range(0..=59));
        });

        if (self.form.year, self.form.month) != before {
            self.form.clamp_day();
            self.calendar = (self.form.year, self.form.month);
        }
    }

    fn calendar_ui(&mut self, ui: &mut egui::Ui) {
        let (year, month) = self.calendar;

        ui.horizontal(|ui| {
            if ui.small_button("<").clicked() {
                self.calendar = step_month(year, month, -1);
            }
            ui.label(format!("{year:04}-{month:02}"));
            if ui.small_button(">").clicked() {
                self.calendar = step_month(year, month, 1);
            }
        });

        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return;
        };
        let offset = first.weekday().num_days_from_monday();
        let days = days_in_month(year, month);

        egui::Grid::new("settings_calendar").show(ui, |ui| {
            for name in WEEKDAYS {
                ui.label(name);
            }
            ui.end_row();

            for _ in 0..offset {
                ui.label("");
            }
            for day in 1..=days {
                let selected =
                    self.form.year == year && self.form.month == month && self.form.day == day;
                if ui.selectable_label(selected, day.to_string()).clicked() {
                    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                        self.form.set_date(date);
                    }
                }
                if (offset + day) % 7 == 0 {
                    ui.end_row();
                }
            }
        });
    }

    fn notice_ui(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notices.front() else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new(notice.kind.title())
            .id(Id::new("settings_notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message.as_str());
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            self.acknowledge();
        }
    }
}

/// An `R,G,B` text field with a color picker that writes back into it.
fn color_row(ui: &mut egui::Ui, label: &str, text: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(text).desired_width(120.0));
        let mut rgb = text.parse::<Rgb>().map(Rgb::to_array).unwrap_or_default();
        if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
            *text = Rgb::from(rgb).to_string();
        }
    });
}

fn step_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutostartError;
    use crate::events::EventBus;

    fn panel(bus: &EventBus) -> SettingsPanel {
        let now = NaiveDate::from_ymd_opt(2030, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        SettingsPanel::new(&CountdownConfig::default_at(now), None, bus.publisher())
    }

    #[test]
    fn step_month_wraps_years() {
        assert_eq!(step_month(2030, 12, 1), (2031, 1));
        assert_eq!(step_month(2030, 1, -1), (2029, 12));
        assert_eq!(step_month(2030, 6, 1), (2030, 7));
    }

    #[test]
    fn invalid_submit_queues_error_and_publishes_nothing() {
        let bus = EventBus::new();
        let mut p = panel(&bus);
        p.form.background = "1,2".into();

        p.submit();

        assert!(bus.drain().is_empty());
        let notices: Vec<_> = p.notices().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert!(notices[0].message.contains("Background color"));
    }

    #[test]
    fn valid_submit_publishes_config() {
        let bus = EventBus::new();
        let mut p = panel(&bus);
        p.form.display_prefix = "T-".into();

        p.submit();

        match bus.drain().as_slice() {
            [AppEvent::ApplyConfig(cfg)] => assert_eq!(cfg.display_prefix, "T-"),
            other => panic!("unexpected events {other:?}"),
        }
        assert_eq!(p.notices().count(), 0);
    }

    #[test]
    fn confirmation_closes_after_warning() {
        let bus = EventBus::new();
        let mut p = panel(&bus);
        p.report_saved(&SaveOutcome {
            autostart_warning: Some(AutostartError::Unsupported),
        });

        let kinds: Vec<_> = p.notices().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Warning, NoticeKind::Info]);

        p.acknowledge();
        assert!(bus.drain().is_empty());
        p.acknowledge();
        assert_eq!(bus.drain(), vec![AppEvent::SettingsClosed]);
    }

    #[test]
    fn centers_on_monitor() {
        let bus = EventBus::new();
        let now = NaiveDate::from_ymd_opt(2030, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let p = SettingsPanel::new(
            &CountdownConfig::default_at(now),
            Some(egui::vec2(1920.0, 1080.0)),
            bus.publisher(),
        );
        let (w, h) = SETTINGS_SIZE;
        assert_eq!(p.position, Some(egui::pos2((1920.0 - w) / 2.0, (1080.0 - h) / 2.0)));
    }
}
