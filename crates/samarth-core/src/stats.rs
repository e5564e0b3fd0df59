//! Aggregation, ranking and correlation over `DataRecord`s.
//!
//! Groups keep first-encounter order and every sort is stable, so ties
//! always resolve to whichever key appeared first in the input. Records
//! lacking the measure being aggregated are skipped.

use samarth_protocol::DataRecord;

/// Count, sum, mean, min and max of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// `None` for an empty series.
pub fn summarize<I>(values: I) -> Option<Summary>
where
    I: IntoIterator<Item = f64>,
{
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        count += 1;
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }
    (count > 0).then(|| Summary {
        count,
        sum,
        mean: sum / count as f64,
        min,
        max,
    })
}

/// Sum of `value` per `key`, in first-encounter order.
pub fn group_sum<K, FK, FV>(records: &[DataRecord], key: FK, value: FV) -> Vec<(K, f64)>
where
    K: PartialEq,
    FK: Fn(&DataRecord) -> Option<K>,
    FV: Fn(&DataRecord) -> Option<f64>,
{
    group(records, key, value)
        .into_iter()
        .map(|(k, values)| (k, values.iter().sum()))
        .collect()
}

/// Mean of `value` per `key`, in first-encounter order.
pub fn group_mean<K, FK, FV>(records: &[DataRecord], key: FK, value: FV) -> Vec<(K, f64)>
where
    K: PartialEq,
    FK: Fn(&DataRecord) -> Option<K>,
    FV: Fn(&DataRecord) -> Option<f64>,
{
    group(records, key, value)
        .into_iter()
        .map(|(k, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (k, mean)
        })
        .collect()
}

// Linear scan keeps encounter order; groups here number in the tens.
fn group<K, FK, FV>(records: &[DataRecord], key: FK, value: FV) -> Vec<(K, Vec<f64>)>
where
    K: PartialEq,
    FK: Fn(&DataRecord) -> Option<K>,
    FV: Fn(&DataRecord) -> Option<f64>,
{
    let mut groups: Vec<(K, Vec<f64>)> = Vec::new();
    for record in records {
        let (Some(k), Some(v)) = (key(record), value(record)) else {
            continue;
        };
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, values)) => values.push(v),
            None => groups.push((k, vec![v])),
        }
    }
    groups
}

/// Stable descending sort by value.
pub fn sort_descending<K>(pairs: &mut [(K, f64)]) {
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
}

/// Crops ranked by summed production, largest first, at most `n`.
pub fn top_n_by_sum(records: &[DataRecord], n: usize) -> Vec<(String, f64)> {
    let mut totals = group_sum(records, |r| r.crop.clone(), |r| r.production);
    sort_descending(&mut totals);
    totals.truncate(n);
    totals
}

/// Rows ranked by production, largest first, at most `n`.
pub fn top_records_by_production(records: &[DataRecord], n: usize) -> Vec<&DataRecord> {
    let mut rows: Vec<&DataRecord> = records.iter().filter(|r| r.production.is_some()).collect();
    rows.sort_by(|a, b| {
        let (a, b) = (a.production.unwrap_or(0.0), b.production.unwrap_or(0.0));
        b.total_cmp(&a)
    });
    rows.truncate(n);
    rows
}

/// The highest-production row; the earliest one on ties.
pub fn max_by_production(records: &[DataRecord]) -> Option<&DataRecord> {
    top_records_by_production(records, 1).into_iter().next()
}

/// Total production per year, ascending by year.
pub fn production_by_year(records: &[DataRecord]) -> Vec<(i32, f64)> {
    let mut by_year = group_sum(records, |r| Some(r.year), |r| r.production);
    by_year.sort_by_key(|(year, _)| *year);
    by_year
}

/// Mean rainfall per year, ascending by year.
pub fn rainfall_by_year(records: &[DataRecord]) -> Vec<(i32, f64)> {
    let mut by_year = group_mean(records, |r| Some(r.year), |r| r.rainfall);
    by_year.sort_by_key(|(year, _)| *year);
    by_year
}

/// One year present in both series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPoint {
    pub year: i32,
    pub production: f64,
    pub rainfall: f64,
}

/// Inner join of yearly production totals and yearly mean rainfall.
pub fn join_by_year(agriculture: &[DataRecord], climate: &[DataRecord]) -> Vec<YearPoint> {
    let rainfall = rainfall_by_year(climate);
    production_by_year(agriculture)
        .into_iter()
        .filter_map(|(year, production)| {
            rainfall
                .iter()
                .find(|(y, _)| *y == year)
                .map(|&(_, rainfall)| YearPoint {
                    year,
                    production,
                    rainfall,
                })
        })
        .collect()
}

/// Pearson correlation coefficient.
///
/// Returns exactly `0.0` when either series has zero variance (including
/// a single point), when the series are empty, or when their lengths
/// differ.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() || xs.len() != ys.len() {
        return 0.0;
    }
    // Rounding in the mean leaves a tiny nonzero variance for constant
    // series like [0.1; 3], so test for constants before dividing.
    if is_constant(xs) || is_constant(ys) {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        cov / denominator
    }
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|v| *v == values[0])
}
