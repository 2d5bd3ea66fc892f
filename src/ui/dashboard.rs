use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{plot, table};

pub const TITLE: &str = "Trekking in Nepal";
const SUBTITLE: &str = "An interactive dashboard exploring trekking routes, difficulty levels, \
                        cost, altitude, and accommodation trends across Nepal.";

const KPI_TITLE_COLOR: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
const KPI_VALUE_COLOR: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Title, KPI cards, the four charts and the record table.
pub fn main_area(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new(TITLE).size(28.0).strong());
            ui.label(SUBTITLE);
            ui.separator();
            ui.add_space(8.0);

            kpi_row(ui, state);
            ui.add_space(16.0);

            ui.columns(2, |cols| {
                section(&mut cols[0], "Treks by Trip Grade", |ui| {
                    plot::grade_count_chart(ui, state)
                });
                section(&mut cols[1], "Cost vs Duration", |ui| {
                    plot::cost_vs_days_chart(ui, state)
                });
            });
            ui.columns(2, |cols| {
                section(&mut cols[0], "Maximum Altitude by Trip Grade", |ui| {
                    plot::altitude_by_grade_chart(ui, state)
                });
                section(&mut cols[1], "Cost by Accommodation Type", |ui| {
                    plot::cost_by_accommodation_chart(ui, state)
                });
            });

            egui::CollapsingHeader::new(RichText::new("Filtered treks").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| table::record_table(ui, state));
        });
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

fn kpi_row(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    ui.columns(3, |cols| {
        kpi_card(&mut cols[0], "Total Treks", &summary.count_label());
        kpi_card(&mut cols[1], "Average Cost (USD)", &summary.mean_cost_label());
        kpi_card(&mut cols[2], "Average Duration (Days)", &summary.mean_days_label());
    });
}

fn kpi_card(ui: &mut Ui, title: &str, value: &str) {
    card(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(
                RichText::new(title.to_uppercase())
                    .size(14.0)
                    .color(KPI_TITLE_COLOR),
            );
            ui.label(
                RichText::new(value)
                    .size(32.0)
                    .strong()
                    .color(KPI_VALUE_COLOR),
            );
        });
    });
}

/// Titled white card holding one chart.
fn section(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    card(ui, |ui: &mut Ui| {
        ui.label(RichText::new(title).size(18.0).strong());
        body(ui);
    });
    ui.add_space(16.0);
}

fn card(ui: &mut Ui, body: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style())
        .fill(Color32::WHITE)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            body(ui);
        });
}
