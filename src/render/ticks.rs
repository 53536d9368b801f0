//! Tick placement and labelling for numeric and date axes.

use chrono::{Datelike, Months, NaiveDate};

/// Number of major ticks aimed for on an axis
pub const TARGET_TICKS: usize = 8;

const DAY_STEPS: &[i64] = &[1, 2, 7, 14];
const MONTH_STEPS: &[u32] = &[1, 2, 3, 6, 12, 24, 60, 120];

/// Rounds a raw step up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced tick values inside `[min, max]` with a "nice" step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if !(max > min) || target == 0 {
        return vec![min];
    }

    // Divided first so spans wider than f64::MAX stay finite
    let step = nice_step(max / target as f64 - min / target as f64);
    let (first, last) = ((min / step).ceil(), (max / step).floor());
    if !(last - first <= (4 * target) as f64) {
        return vec![min];
    }
    let (first, last) = (first as i64, last as i64);

    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            // Avoid printing "-0"
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

/// Formats a tick value with just enough decimals to tell neighbours apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..=10)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(10) as usize;
    format!("{:.*}", decimals, value)
}

/// Label and position of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Ticks for a numeric axis.
pub fn numeric_ticks(min: f64, max: f64) -> Vec<Tick> {
    let values = nice_ticks(min, max, TARGET_TICKS);
    let step = if values.len() > 1 { values[1] - values[0] } else { nice_step(max - min) };
    values
        .into_iter()
        .map(|value| Tick { value, label: format_tick(value, step) })
        .collect()
}

pub fn day_to_date(day: i64) -> Option<NaiveDate> {
    i32::try_from(day).ok().and_then(NaiveDate::from_num_days_from_ce_opt)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Ticks for a date axis whose values are day numbers.
///
/// Short spans tick on whole days or weeks; longer spans tick on the first
/// day of every Nth month.
pub fn date_ticks(min_day: f64, max_day: f64) -> Vec<Tick> {
    if !(max_day > min_day) {
        return day_to_date(min_day.round() as i64)
            .map(|d| vec![Tick { value: d.num_days_from_ce() as f64, label: format_date(d) }])
            .unwrap_or_default();
    }

    let span = max_day - min_day;
    if let Some(&step) = DAY_STEPS.iter().find(|&&s| span / s as f64 <= TARGET_TICKS as f64) {
        let first = (min_day / step as f64).ceil() as i64;
        let last = (max_day / step as f64).floor() as i64;
        return (first..=last)
            .filter_map(|i| day_to_date(i * step))
            .map(|d| Tick { value: d.num_days_from_ce() as f64, label: format_date(d) })
            .collect();
    }

    let months = span / 30.4;
    let step = MONTH_STEPS
        .iter()
        .copied()
        .find(|&s| months / s as f64 <= TARGET_TICKS as f64)
        .unwrap_or(*MONTH_STEPS.last().unwrap_or(&12));

    let (Some(start), Some(end)) = (day_to_date(min_day.ceil() as i64), day_to_date(max_day.floor() as i64)) else {
        return Vec::new();
    };

    // First month boundary on or after `start`, aligned to the step
    let mut month_index = start.year() * 12 + start.month0() as i32;
    if start.day() != 1 {
        month_index += 1;
    }
    let step_i = step as i32;
    month_index = (month_index + step_i - 1).div_euclid(step_i) * step_i;

    let mut ticks = Vec::new();
    let Some(mut current) = NaiveDate::from_ymd_opt(month_index.div_euclid(12), month_index.rem_euclid(12) as u32 + 1, 1) else {
        return ticks;
    };
    while current <= end {
        ticks.push(Tick { value: current.num_days_from_ce() as f64, label: format_date(current) });
        match current.checked_add_months(Months::new(step)) {
            Some(next) => current = next,
            None => break,
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(2.2), 2.5);
        assert_eq!(nice_step(42.0), 50.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_nice_ticks_extreme_range() {
        let ticks = nice_ticks(-1.01e308, 1.01e308, TARGET_TICKS);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 4 * TARGET_TICKS + 1);
        assert!(ticks.iter().all(|t| t.is_finite()));

        assert!(nice_ticks(f64::NEG_INFINITY, f64::INFINITY, TARGET_TICKS).is_empty());
        assert!(nice_ticks(0.0, f64::NAN, TARGET_TICKS).is_empty());
        assert_eq!(nice_ticks(3.0, 3.0, TARGET_TICKS), vec![3.0]);
    }

    #[test]
    fn test_nice_ticks_within_range() {
        let ticks = nice_ticks(-0.93, 0.87, 8);
        assert_eq!(ticks.first(), Some(&-0.75));
        assert_eq!(ticks.last(), Some(&0.75));
        assert!(ticks.iter().all(|t| (-0.93..=0.87).contains(t)));
        assert!(ticks.contains(&0.0));
    }

    #[test]
    fn test_format_tick_decimals() {
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(20.0, 5.0), "20");
        assert_eq!(format_tick(-0.1, 0.1), "-0.1");
    }

    #[test]
    fn test_short_date_span_uses_days() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let ticks = date_ticks(start.num_days_from_ce() as f64, end.num_days_from_ce() as f64);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].label, "2024-01-01");
        assert_eq!(ticks[5].label, "2024-01-06");
    }

    #[test]
    fn test_long_date_span_uses_month_starts() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();
        let ticks = date_ticks(start.num_days_from_ce() as f64, end.num_days_from_ce() as f64);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= TARGET_TICKS + 1);
        assert!(ticks.iter().all(|t| t.label.ends_with("-01")));
        assert!(ticks.windows(2).all(|w| w[0].value < w[1].value));
    }
}
