use crate::color::CategoryColors;
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::{Accommodation, TrekDataset, TripGrade};
use crate::data::summary::Summary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every mutation of `filters` goes through a method that calls
/// [`AppState::refilter`], so `visible_indices` and `summary` always describe
/// the current selection.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: TrekDataset,

    /// Sidebar selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// KPI values for `visible_indices` (cached).
    pub summary: Summary,

    /// Colours for grades and accommodation types.
    pub colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: TrekDataset) -> Self {
        let mut state = AppState {
            dataset: TrekDataset::default(),
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            summary: Summary::default(),
            colors: CategoryColors::default(),
            status_message: None,
        };
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset and reset filters to "everything".
    pub fn set_dataset(&mut self, dataset: TrekDataset) {
        self.filters = FilterState::for_dataset(&dataset);
        self.dataset = dataset;
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and `summary` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        self.summary = Summary::compute(&self.dataset, &self.visible_indices);
    }

    /// Toggle a single grade in the grade filter.
    pub fn toggle_grade(&mut self, grade: Option<TripGrade>) {
        if !self.filters.grades.remove(&grade) {
            self.filters.grades.insert(grade);
        }
        self.refilter();
    }

    /// Toggle a single accommodation type in the accommodation filter.
    pub fn toggle_accommodation(&mut self, acc: Option<Accommodation>) {
        if !self.filters.accommodations.remove(&acc) {
            self.filters.accommodations.insert(acc);
        }
        self.refilter();
    }

    pub fn select_all_grades(&mut self, all: bool) {
        self.filters.grades = if all {
            self.dataset.grades.clone()
        } else {
            Default::default()
        };
        self.refilter();
    }

    pub fn select_all_accommodations(&mut self, all: bool) {
        self.filters.accommodations = if all {
            self.dataset.accommodations.clone()
        } else {
            Default::default()
        };
        self.refilter();
    }

    /// Set the cost window. Bounds are clamped to the dataset's observed
    /// range and the lower bound never exceeds the upper. A value within
    /// [`COST_SNAP_USD`] of an end of the range lands exactly on it.
    pub fn set_cost_range(&mut self, lo: f64, hi: f64) {
        let (min, max) = self.dataset.cost_bounds.unwrap_or((0.0, 0.0));
        let lo = snap_to_bounds(lo.clamp(min, max), min, max);
        let hi = snap_to_bounds(hi.clamp(lo, max), min, max);
        self.filters.cost_range = (lo, hi);
        self.refilter();
    }

    /// Restore the full observed cost span.
    pub fn reset_cost_range(&mut self) {
        self.filters.cost_range = self.dataset.cost_bounds.unwrap_or((0.0, 0.0));
        self.refilter();
    }
}

/// Slider values closer than this to an end of the cost span snap onto it.
pub const COST_SNAP_USD: f64 = 0.5;

fn snap_to_bounds(value: f64, min: f64, max: f64) -> f64 {
    if (value - min).abs() < COST_SNAP_USD {
        min
    } else if (max - value).abs() < COST_SNAP_USD {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;

    const CSV: &str = "\
Trek,Cost (USD),Time,Trip Grade,Max Altitude,Accomodation
Everest Base Camp,\"USD 1,400\",14 Days,Moderate,5364m,Hotel/Teahouses
Poon Hill,$600,5 Days,Easy,3210m,Hotel/Guesthouses
Manaslu Circuit,\"2,100\",16 Days,Strenuous,5106m,Hotel/Lodges
Langtang,900,8 Days,Trekking Peak,4984m,Hotel/Teahouse
";

    fn state() -> AppState {
        AppState::new(load_csv(CSV.as_bytes()).unwrap())
    }

    #[test]
    fn test_new_state_shows_everything() {
        let s = state();
        assert_eq!(s.visible_indices, vec![0, 1, 2, 3]);
        assert_eq!(s.summary.count, 4);
        assert_eq!(s.filters.cost_range, (600.0, 2100.0));
    }

    #[test]
    fn test_toggle_grade_refilters() {
        let mut s = state();
        s.toggle_grade(Some(TripGrade::Easy));
        assert_eq!(s.visible_indices, vec![0, 2, 3]);
        s.toggle_grade(None);
        assert_eq!(s.visible_indices, vec![0, 2]);
        s.toggle_grade(Some(TripGrade::Easy));
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
        assert_eq!(s.summary.count, 3);
    }

    #[test]
    fn test_select_none_gives_placeholder_kpis() {
        let mut s = state();
        s.select_all_accommodations(false);
        assert!(s.visible_indices.is_empty());
        assert_eq!(s.summary.mean_cost_label(), "N/A");
        s.select_all_accommodations(true);
        assert_eq!(s.visible_indices.len(), 4);
    }

    #[test]
    fn test_cost_range_is_clamped() {
        let mut s = state();
        s.set_cost_range(1000.0, 500.0);
        assert_eq!(s.filters.cost_range, (1000.0, 1000.0));
        assert!(s.visible_indices.is_empty());

        s.set_cost_range(0.0, 1500.0);
        assert_eq!(s.filters.cost_range, (600.0, 1500.0));
        assert_eq!(s.visible_indices, vec![0, 1, 3]);

        s.reset_cost_range();
        assert_eq!(s.visible_indices.len(), 4);
    }

    #[test]
    fn test_fractional_cost_bounds_stay_reachable() {
        let csv = "\
Trek,Cost (USD),Time,Trip Grade,Max Altitude,Accomodation
Poon Hill,650.50,5 Days,Easy,3210m,Hotel/Guesthouses
Langtang,900,8 Days,Moderate,4984m,Hotel/Teahouse
Manaslu Circuit,\"2,100.75\",16 Days,Strenuous,5106m,Hotel/Lodges
";
        let mut s = AppState::new(load_csv(csv.as_bytes()).unwrap());
        assert_eq!(s.filters.cost_range, (650.5, 2100.75));

        s.set_cost_range(650.5, 2100.75);
        assert_eq!(s.visible_indices, vec![0, 1, 2]);

        // Slider positions just inside the ends keep the end rows.
        s.set_cost_range(650.8, 2100.4);
        assert_eq!(s.filters.cost_range, (650.5, 2100.75));
        assert_eq!(s.visible_indices, vec![0, 1, 2]);

        s.set_cost_range(700.0, 2000.0);
        assert_eq!(s.visible_indices, vec![1]);
    }

    #[test]
    fn test_set_dataset_resets_filters() {
        let mut s = state();
        s.select_all_grades(false);
        s.status_message = Some("Error: boom".into());
        s.set_dataset(load_csv(CSV.as_bytes()).unwrap());
        assert_eq!(s.visible_indices.len(), 4);
        assert!(s.status_message.is_none());
    }
}
