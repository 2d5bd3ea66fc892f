use eframe::egui::{self, Color32};

use crate::data::model::TrekDataset;
use crate::state::AppState;
use crate::ui::{dashboard, panels};

/// Page background behind the white cards.
const BACKGROUND: Color32 = Color32::from_rgb(0xf6, 0xf7, 0xfb);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrekDashboardApp {
    pub state: AppState,
}

impl TrekDashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: TrekDataset) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        cc.egui_ctx.style_mut(|style| {
            style.visuals.panel_fill = BACKGROUND;
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        });

        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for TrekDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::main_area(ui, &self.state);
        });
    }
}
