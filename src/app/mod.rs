//! The eframe application: overlay window plus settings viewport.
//!
//! Each frame polls the countdown, draws the overlay, re-sizes and
//! re-aligns the window after a render, shows the settings panel, then
//! dispatches queued events.

pub mod helpers;
pub mod state;

use std::time::Instant;

use eframe::egui::{self, ViewportBuilder, ViewportCommand, WindowLevel};

use crate::countdown::{aligned_origin, window_size, ScreenRect};
use crate::error::AppResult;
use crate::events::{EventBus, EventPublisher};
use crate::handlers::dispatch_events;
use crate::model::constants::{MIN_WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE};
use crate::platform::{self, Autostart, WORK_AREA_IS_PHYSICAL};
use crate::storage::SettingsStore;
use crate::ui::show_overlay;

pub use state::{local_now, OverlayState};

pub struct CountdownApp {
    bus: EventBus,
    publisher: EventPublisher,
    state: OverlayState,
    /// Style revision of the last aligned render.
    aligned_revision: Option<u64>,
}

impl CountdownApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: SettingsStore,
        autostart: Box<dyn Autostart>,
    ) -> Self {
        helpers::install_cjk_font(&cc.egui_ctx);

        let bus = EventBus::new();
        let publisher = bus.publisher();
        let state = OverlayState::new(store, autostart, bus.publisher(), local_now(), Instant::now());

        Self {
            bus,
            publisher,
            state,
            aligned_revision: None,
        }
    }

    /// Resize to fit the label and move to the configured corner.
    fn realign(&self, ctx: &egui::Context, label_natural_width: f32) {
        let (w, h) = window_size(label_natural_width);
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(egui::vec2(w, h)));

        let Some(area) = screen_area(ctx) else {
            return;
        };
        let (x, y) = aligned_origin(area, (w, h), self.state.surface().config().alignment);
        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(egui::pos2(x, y)));
    }
}

/// Available screen area in points.
fn screen_area(ctx: &egui::Context) -> Option<ScreenRect> {
    if let Some(area) = platform::work_area() {
        if WORK_AREA_IS_PHYSICAL {
            return Some(area.scaled(ctx.pixels_per_point()));
        }
        return Some(area);
    }
    ctx.input(|i| i.viewport().monitor_size)
        .map(|size| ScreenRect::new(0.0, 0.0, size.x, size.y))
}

impl eframe::App for CountdownApp {
    fn clear_color(&self, _: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wall = local_now();
        let mono = Instant::now();
        self.state
            .set_monitor_size(ctx.input(|i| i.viewport().monitor_size));

        let ticked = self.state.surface_mut().poll(wall, mono);
        let revision = self.state.surface().style_revision();
        let restyled = self.aligned_revision != Some(revision);

        let natural_width = show_overlay(ctx, self.state.surface(), &self.publisher);
        if ticked || restyled {
            self.realign(ctx, natural_width);
            self.aligned_revision = Some(revision);
        }

        self.state.show_settings(ctx);

        if dispatch_events(&self.bus, &mut self.state) > 0 {
            ctx.request_repaint();
        }
        if self.state.quit_requested() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        if let Some(wait) = self.state.surface().until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Open the default settings store and run the overlay until it closes.
pub fn run() -> AppResult<()> {
    let store = SettingsStore::open_default();
    let autostart = platform::system_autostart();

    let mut viewport = ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([MIN_WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnBottom);
    if let Some(icon) = helpers::load_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!("starting overlay");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, store, autostart)))),
    )?;
    tracing::info!("overlay closed");
    Ok(())
}
