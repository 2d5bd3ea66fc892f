use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{TrekRecord, category_label};
use crate::data::summary::NOT_AVAILABLE;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Columns shown after the pass-through CSV columns.
const NORMALIZED_HEADERS: [&str; 5] = [
    "Trip Grade",
    "Accommodation",
    "Cost (USD)",
    "Days",
    "Max Altitude",
];

// ---------------------------------------------------------------------------
// Filtered record table
// ---------------------------------------------------------------------------

/// Every visible record: extra CSV columns as-is, then the normalized fields.
pub fn record_table(ui: &mut Ui, state: &AppState) {
    let ds = &state.dataset;
    let n_cols = ds.extra_columns.len() + NORMALIZED_HEADERS.len();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(80.0), n_cols)
        .min_scrolled_height(0.0)
        .max_scroll_height(360.0)
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for name in ds
                .extra_columns
                .iter()
                .map(String::as_str)
                .chain(NORMALIZED_HEADERS)
            {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let rec = &ds.records[state.visible_indices[row.index()]];
                for col in &ds.extra_columns {
                    row.col(|ui| {
                        ui.label(rec.extra.get(col).map(String::as_str).unwrap_or(""));
                    });
                }
                for cell in normalized_cells(rec) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn normalized_cells(rec: &TrekRecord) -> [String; 5] {
    [
        category_label(rec.trip_grade.as_ref()),
        category_label(rec.accommodation.as_ref()),
        number_cell(rec.cost_usd),
        number_cell(rec.days),
        number_cell(rec.max_altitude),
    ]
}

fn number_cell(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.0}"))
}
