use std::ops::RangeInclusive;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Plot, PlotPoints, Points,
};

use crate::data::summary::{
    BoxStats, altitude_by_grade, cost_by_accommodation, cost_vs_days, grade_counts,
};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 280.0;
const SCATTER_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

// ---------------------------------------------------------------------------
// Shared plot setup
// ---------------------------------------------------------------------------

/// A fixed, non-interactive chart frame. Zooming a count plot has no use and
/// fights with the outer scroll area.
fn static_plot(id: &str) -> Plot<'_> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
}

/// Label integer x positions with category names; blank between them.
fn category_axis(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Treks by Trip Grade (count plot)
// ---------------------------------------------------------------------------

pub fn grade_count_chart(ui: &mut Ui, state: &AppState) {
    let counts = grade_counts(&state.dataset, &state.visible_indices);

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(x, &(grade, n))| {
            Bar::new(x as f64, n as f64)
                .name(grade.label())
                .fill(state.colors.grade(Some(grade)))
                .width(0.7)
        })
        .collect();
    let labels = counts.iter().map(|(g, _)| g.to_string()).collect();

    static_plot("grade_counts")
        .x_axis_label("Trip Grade")
        .y_axis_label("count")
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Cost vs Duration (scatter)
// ---------------------------------------------------------------------------

pub fn cost_vs_days_chart(ui: &mut Ui, state: &AppState) {
    let points: PlotPoints = cost_vs_days(&state.dataset, &state.visible_indices)
        .into_iter()
        .collect();

    static_plot("cost_vs_days")
        .x_axis_label("Days")
        .y_axis_label("Cost (USD)")
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name("Treks")
                    .radius(3.5)
                    .color(SCATTER_COLOR),
            );
        });
}

// ---------------------------------------------------------------------------
// Box plots
// ---------------------------------------------------------------------------

pub fn altitude_by_grade_chart(ui: &mut Ui, state: &AppState) {
    let groups: Vec<(String, Color32, BoxStats)> =
        altitude_by_grade(&state.dataset, &state.visible_indices)
            .into_iter()
            .map(|(g, stats)| (g.to_string(), state.colors.grade(Some(g)), stats))
            .collect();
    box_chart(ui, "altitude_by_grade", "Trip Grade", "Max Altitude", groups);
}

pub fn cost_by_accommodation_chart(ui: &mut Ui, state: &AppState) {
    let groups: Vec<(String, Color32, BoxStats)> =
        cost_by_accommodation(&state.dataset, &state.visible_indices)
            .into_iter()
            .map(|(a, stats)| (a.to_string(), state.colors.accommodation(Some(a)), stats))
            .collect();
    box_chart(ui, "cost_by_accommodation", "Accommodation", "Cost (USD)", groups);
}

/// One box per group at x = 0, 1, 2, … with outliers drawn as points.
fn box_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    y_label: &str,
    groups: Vec<(String, Color32, BoxStats)>,
) {
    let mut boxes = Vec::with_capacity(groups.len());
    let mut outliers: Vec<[f64; 2]> = Vec::new();

    for (x, (name, color, stats)) in groups.iter().enumerate() {
        let x = x as f64;
        let spread = BoxSpread::new(
            stats.lower_whisker,
            stats.q1,
            stats.median,
            stats.q3,
            stats.upper_whisker,
        );
        boxes.push(
            BoxElem::new(x, spread)
                .name(name)
                .box_width(0.6)
                .fill(color.linear_multiply(0.5))
                .stroke(Stroke::new(1.5, *color)),
        );
        outliers.extend(stats.outliers.iter().map(|&v| [x, v]));
    }
    let labels = groups.into_iter().map(|(name, _, _)| name).collect();

    static_plot(id)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes));
            if !outliers.is_empty() {
                plot_ui.points(
                    Points::new(PlotPoints::new(outliers))
                        .radius(2.5)
                        .color(Color32::DARK_GRAY),
                );
            }
        });
}
