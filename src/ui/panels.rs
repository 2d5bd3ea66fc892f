use std::collections::BTreeSet;
use std::fmt::Display;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::category_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// What a category checklist asked for this frame.
enum Pick<T> {
    Toggle(T),
    All,
    Clear,
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Trip grade ----
            let domain = state.dataset.grades.clone();
            let colors = state.colors.clone();
            let pick = category_checklist(
                ui,
                "Trip Grade",
                &domain,
                &state.filters.grades,
                |g| colors.grade(*g),
            );
            match pick {
                Some(Pick::Toggle(g)) => state.toggle_grade(g),
                Some(Pick::All) => state.select_all_grades(true),
                Some(Pick::Clear) => state.select_all_grades(false),
                None => {}
            }
            ui.add_space(20.0);

            // ---- Accommodation ----
            let domain = state.dataset.accommodations.clone();
            let pick = category_checklist(
                ui,
                "Accommodation Type",
                &domain,
                &state.filters.accommodations,
                |a| colors.accommodation(*a),
            );
            match pick {
                Some(Pick::Toggle(a)) => state.toggle_accommodation(a),
                Some(Pick::All) => state.select_all_accommodations(true),
                Some(Pick::Clear) => state.select_all_accommodations(false),
                None => {}
            }
            ui.add_space(20.0);

            // ---- Cost window ----
            cost_range_controls(ui, state);
        });
}

/// Checkbox per observed value plus All / None buttons.
fn category_checklist<T: Copy + Ord + Display>(
    ui: &mut Ui,
    title: &str,
    domain: &BTreeSet<Option<T>>,
    selected: &BTreeSet<Option<T>>,
    color_for: impl Fn(&Option<T>) -> Color32,
) -> Option<Pick<Option<T>>> {
    let mut pick = None;

    // Show count of selected / total in the header
    let header_text = format!("{title}  ({}/{})", selected.len(), domain.len());
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    pick = Some(Pick::All);
                }
                if ui.small_button("None").clicked() {
                    pick = Some(Pick::Clear);
                }
            });

            for value in domain {
                let mut checked = selected.contains(value);
                let text = RichText::new(category_label(value.as_ref())).color(color_for(value));
                if ui.checkbox(&mut checked, text).changed() {
                    pick = Some(Pick::Toggle(*value));
                }
            }
        });

    pick
}

/// Two sliders bounded by the observed cost span, plus a reset button.
fn cost_range_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Cost Range (USD)");

    let Some((min, max)) = state.dataset.cost_bounds else {
        ui.label("No cost data in this file.");
        return;
    };

    let (mut lo, mut hi) = state.filters.cost_range;
    let lo_changed = ui
        .add(
            egui::Slider::new(&mut lo, min..=max)
                .text("min")
                .prefix("$")
                .min_decimals(0)
                .max_decimals(2),
        )
        .changed();
    let hi_changed = ui
        .add(
            egui::Slider::new(&mut hi, min..=max)
                .text("max")
                .prefix("$")
                .min_decimals(0)
                .max_decimals(2),
        )
        .changed();

    if lo_changed {
        // Dragging the lower bound past the upper pushes the upper along.
        state.set_cost_range(lo, hi.max(lo));
    } else if hi_changed {
        state.set_cost_range(lo.min(hi), hi);
    }

    if ui.small_button("Reset").clicked() {
        state.reset_cost_range();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} treks loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Replace the dataset with another CSV. On failure the current dataset is
/// kept and the error is shown in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open trek data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} treks from {} (extra columns {:?})",
                    dataset.len(),
                    path.display(),
                    dataset.extra_columns
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
