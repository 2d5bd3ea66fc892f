use std::collections::BTreeMap;

use super::model::{Accommodation, TrekDataset, TripGrade};

/// Shown in place of a statistic that has no contributing values.
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// KPI summary
// ---------------------------------------------------------------------------

/// Headline numbers for the filtered subset.
///
/// Means skip missing values and are `None` when nothing contributes, so an
/// empty subset never produces a NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_cost: Option<f64>,
    pub mean_days: Option<f64>,
}

impl Summary {
    pub fn compute(dataset: &TrekDataset, indices: &[usize]) -> Self {
        let records = || indices.iter().map(|&i| &dataset.records[i]);
        Summary {
            count: indices.len(),
            mean_cost: mean(records().filter_map(|r| r.cost_usd)),
            mean_days: mean(records().filter_map(|r| r.days)),
        }
    }

    pub fn count_label(&self) -> String {
        self.count.to_string()
    }

    /// Whole dollars, truncated: `$1234`.
    pub fn mean_cost_label(&self) -> String {
        match self.mean_cost {
            Some(v) => format!("${}", v.trunc() as i64),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// One decimal place: `12.5`.
    pub fn mean_days_label(&self) -> String {
        match self.mean_days {
            Some(v) => format!("{v:.1}"),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

// ---------------------------------------------------------------------------
// Chart aggregates
// ---------------------------------------------------------------------------

/// Records per known grade, in difficulty order. Grades absent from the
/// subset are omitted; missing grades are not counted.
pub fn grade_counts(dataset: &TrekDataset, indices: &[usize]) -> Vec<(TripGrade, usize)> {
    let mut counts: BTreeMap<TripGrade, usize> = BTreeMap::new();
    for &i in indices {
        if let Some(grade) = dataset.records[i].trip_grade {
            *counts.entry(grade).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}

/// `(days, cost)` pairs for rows where both are known.
pub fn cost_vs_days(dataset: &TrekDataset, indices: &[usize]) -> Vec<[f64; 2]> {
    indices
        .iter()
        .filter_map(|&i| {
            let rec = &dataset.records[i];
            Some([rec.days?, rec.cost_usd?])
        })
        .collect()
}

/// Maximum altitude distribution per known grade.
pub fn altitude_by_grade(dataset: &TrekDataset, indices: &[usize]) -> Vec<(TripGrade, BoxStats)> {
    grouped_box_stats(indices.iter().filter_map(|&i| {
        let rec = &dataset.records[i];
        Some((rec.trip_grade?, rec.max_altitude?))
    }))
}

/// Cost distribution per known accommodation type.
pub fn cost_by_accommodation(
    dataset: &TrekDataset,
    indices: &[usize],
) -> Vec<(Accommodation, BoxStats)> {
    grouped_box_stats(indices.iter().filter_map(|&i| {
        let rec = &dataset.records[i];
        Some((rec.accommodation?, rec.cost_usd?))
    }))
}

fn grouped_box_stats<K: Ord>(pairs: impl Iterator<Item = (K, f64)>) -> Vec<(K, BoxStats)> {
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }
    groups
        .into_iter()
        .filter_map(|(key, values)| BoxStats::from_values(values).map(|s| (key, s)))
        .collect()
}

// ---------------------------------------------------------------------------
// Box-plot statistics
// ---------------------------------------------------------------------------

/// Tukey box: quartiles plus whiskers reaching the most extreme observation
/// within 1.5 IQR of the box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Observations beyond the whiskers.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// `None` for an empty group. NaN values are ignored.
    pub fn from_values(mut values: Vec<f64>) -> Option<Self> {
        values.retain(|v| !v.is_nan());
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let q1 = quantile(&values, 0.25);
        let median = quantile(&values, 0.5);
        let q3 = quantile(&values, 0.75);
        let reach = 1.5 * (q3 - q1);
        let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);

        let inside = || values.iter().copied().filter(|&v| v >= lo_fence && v <= hi_fence);
        let lower_whisker = inside().fold(f64::INFINITY, f64::min).min(q1);
        let upper_whisker = inside().fold(f64::NEG_INFINITY, f64::max).max(q3);
        let outliers = values
            .iter()
            .copied()
            .filter(|&v| v < lo_fence || v > hi_fence)
            .collect();

        Some(BoxStats {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

/// Linear interpolation between closest ranks. `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
