//! Buffered settings form.
//!
//! The form holds raw user input. Nothing reaches the store or the overlay
//! until [`SettingsForm::validate`] succeeds.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::clamp;
use crate::error::{ColorField, FormError};
use crate::model::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::model::{Alignment, CountdownConfig, Rgb, ThemePreset};

/// Editable copy of a [`CountdownConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub display_prefix: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Background color as typed, `R,G,B`.
    pub background: String,
    /// Text color as typed, `R,G,B`.
    pub text_color: String,
    pub font_size: u32,
    pub background_opacity: u8,
    pub alignment: Alignment,
    pub auto_start: bool,
    pub auto_resume: bool,
    pub adapt_to_wallpaper: bool,
}

impl SettingsForm {
    pub fn from_config(config: &CountdownConfig) -> Self {
        let t = config.target;
        Self {
            display_prefix: config.display_prefix.clone(),
            year: t.year(),
            month: t.month(),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            background: config.background.to_string(),
            text_color: config.text_color.to_string(),
            font_size: config.font_size,
            background_opacity: config.background_opacity,
            alignment: config.alignment,
            auto_start: config.auto_start,
            auto_resume: config.auto_resume,
            adapt_to_wallpaper: config.adapt_to_wallpaper,
        }
    }

    /// Overwrite both colors, font size and opacity. Other fields stay.
    pub fn apply_preset(&mut self, preset: ThemePreset) {
        let v = preset.values();
        self.background = v.background.to_string();
        self.text_color = v.text_color.to_string();
        self.font_size = v.font_size;
        self.background_opacity = v.background_opacity;
    }

    /// The target time, if the date-time fields form a real calendar date.
    pub fn target(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }

    pub fn set_target(&mut self, target: NaiveDateTime) {
        self.year = target.year();
        self.month = target.month();
        self.day = target.day();
        self.hour = target.hour();
        self.minute = target.minute();
        self.second = target.second();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.year = date.year();
        self.month = date.month();
        self.day = date.day();
    }

    /// Pull the day back into the current month after a year or month
    /// change (31 March → 30 April).
    pub fn clamp_day(&mut self) {
        let last = days_in_month(self.year, self.month);
        self.day = clamp(self.day, 1, last);
    }

    /// Build the config this form describes.
    pub fn validate(&self) -> Result<CountdownConfig, FormError> {
        let background = parse_color(&self.background, ColorField::Background)?;
        let text_color = parse_color(&self.text_color, ColorField::Text)?;
        let target = self.target().ok_or_else(|| {
            FormError::InvalidTarget(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            ))
        })?;

        Ok(CountdownConfig {
            display_prefix: self.display_prefix.clone(),
            target,
            background,
            text_color,
            background_opacity: self.background_opacity,
            font_size: clamp(self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE),
            alignment: self.alignment,
            auto_start: self.auto_start,
            auto_resume: self.auto_resume,
            adapt_to_wallpaper: self.adapt_to_wallpaper,
        })
    }
}

fn parse_color(raw: &str, field: ColorField) -> Result<Rgb, FormError> {
    raw.parse()
        .map_err(|source| FormError::InvalidColor { field, source })
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map(|n| n.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::color::ParseRgbError;

    fn base() -> CountdownConfig {
        let now = NaiveDate::from_ymd_opt(2030, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        CountdownConfig::default_at(now)
    }

    #[test]
    fn from_config_round_trips_through_validate() {
        let cfg = base();
        let form = SettingsForm::from_config(&cfg);
        assert_eq!(form.validate().unwrap(), cfg);
    }

    #[test]
    fn accepts_whitespace_around_components() {
        let mut form = SettingsForm::from_config(&base());
        form.background = " 255 , 0 ,0 ".into();
        let cfg = form.validate().unwrap();
        assert_eq!(cfg.background, Rgb::new(255, 0, 0));
    }

    #[test]
    fn rejects_out_of_range_component() {
        let mut form = SettingsForm::from_config(&base());
        form.background = "256,0,0".into();
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidColor {
                field: ColorField::Background,
                source: ParseRgbError::OutOfRange(256),
            })
        );
    }

    #[test]
    fn rejects_wrong_component_count_in_text_color() {
        let mut form = SettingsForm::from_config(&base());
        form.text_color = "1,2".into();
        assert!(matches!(
            form.validate(),
            Err(FormError::InvalidColor {
                field: ColorField::Text,
                source: ParseRgbError::ComponentCount(2),
            })
        ));
    }

    #[test]
    fn rejects_non_numeric_color() {
        let mut form = SettingsForm::from_config(&base());
        form.text_color = "a,b,c".into();
        assert!(matches!(
            form.validate(),
            Err(FormError::InvalidColor { field: ColorField::Text, .. })
        ));
    }

    #[test]
    fn rejects_impossible_date() {
        let mut form = SettingsForm::from_config(&base());
        form.month = 2;
        form.day = 30;
        assert!(matches!(form.validate(), Err(FormError::InvalidTarget(_))));
    }

    #[test]
    fn preset_touches_only_theme_fields() {
        let mut form = SettingsForm::from_config(&base());
        form.display_prefix = "Launch in ".into();
        form.alignment = Alignment::TopRight;
        form.background = "1,2,3".into();
        form.font_size = 12;

        form.apply_preset(ThemePreset::Dark);

        assert_eq!(form.background, "40,40,40");
        assert_eq!(form.text_color, "255,255,255");
        assert_eq!(form.font_size, 42);
        assert_eq!(form.background_opacity, 200);
        assert_eq!(form.display_prefix, "Launch in ");
        assert_eq!(form.alignment, Alignment::TopRight);
    }

    #[test]
    fn clamp_day_follows_month_length() {
        let mut form = SettingsForm::from_config(&base());
        form.month = 3;
        form.day = 31;
        form.month = 4;
        form.clamp_day();
        assert_eq!(form.day, 30);

        form.year = 2028;
        form.month = 2;
        form.day = 31;
        form.clamp_day();
        assert_eq!(form.day, 29);
    }

    #[test]
    fn days_in_month_values() {
        assert_eq!(days_in_month(2030, 1), 31);
        assert_eq!(days_in_month(2030, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2030, 12), 31);
        assert_eq!(days_in_month(2030, 13), 0);
    }
}
