//! Client-side aggregation of pre-aggregated bonus and revenue data.
//!
//! Nothing here recomputes bonuses; rows are summed, ranked and formatted
//! for display only.

use serde::Serialize;

use crate::locale;
use crate::models::{BonusResult, BonusRow, RevenuePoint, RevenueWeek};

/// Currency suffix for amounts.
pub const CURRENCY: &str = "₮";

/// Totals over a bonus report.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct BonusSummary {
    pub doctors: usize,
    pub total_exams: u64,
    pub total_bonus: f64,
}

impl BonusSummary {
    pub fn from_rows(rows: &[BonusRow]) -> Self {
        Self {
            doctors: rows.len(),
            total_exams: rows.iter().map(|r| r.exam_count).sum(),
            total_bonus: rows.iter().map(|r| r.total_bonus).sum(),
        }
    }
}

/// The first `n` rows, in server order.
///
/// The bonus report is already sorted by bonus, so the dashboard just takes
/// a prefix.
pub fn top_referrers(rows: &[BonusRow], n: usize) -> &[BonusRow] {
    &rows[..rows.len().min(n)]
}

/// Sum of a calculator run.
pub fn calculator_total(results: &[BonusResult]) -> f64 {
    results.iter().map(|r| r.bonus).sum()
}

/// One bar of the weekly revenue chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RevenueBar {
    pub label: String,
    pub total: f64,
    /// Height relative to the tallest bar, in `0.0..=1.0`.
    pub ratio: f64,
}

/// Weekly revenue prepared for a bar chart.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RevenueChart {
    pub bars: Vec<RevenueBar>,
    /// Never below 1, so ratios stay finite for an all-zero week.
    pub max: f64,
    pub total_revenue: f64,
}

impl RevenueChart {
    pub fn from_series(series: &[RevenuePoint], total_revenue: f64) -> Self {
        let max = series.iter().map(|p| p.total).fold(1.0_f64, f64::max);
        let bars = series
            .iter()
            .map(|point| RevenueBar {
                label: locale::day_label(&point.label).to_string(),
                total: point.total,
                ratio: (point.total / max).clamp(0.0, 1.0),
            })
            .collect();
        Self {
            bars,
            max,
            total_revenue,
        }
    }

    pub fn from_week(week: &RevenueWeek) -> Self {
        Self::from_series(&week.series, week.total_revenue)
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Group the integer part with commas and keep at most three decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if negative && (grouped != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Display form of a currency amount, e.g. `1,250,000 ₮`.
pub fn format_amount(value: f64) -> String {
    format!("{} {}", format_number(value), CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(name: &str, count: u64, bonus: f64) -> BonusRow {
        BonusRow {
            doctor_id: json!(1),
            doctor_name: name.to_string(),
            hospital: String::new(),
            exam_count: count,
            total_bonus: bonus,
        }
    }

    #[test]
    fn test_summary_totals() {
        let rows = vec![row("A", 3, 150_000.0), row("B", 1, 50_000.0)];
        let summary = BonusSummary::from_rows(&rows);
        assert_eq!(summary.doctors, 2);
        assert_eq!(summary.total_exams, 4);
        assert_eq!(summary.total_bonus, 200_000.0);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(BonusSummary::from_rows(&[]), BonusSummary::default());
    }

    #[test]
    fn test_top_referrers_takes_prefix() {
        let rows: Vec<_> = (0..7).map(|i| row(&format!("D{i}"), i, 0.0)).collect();
        let top = top_referrers(&rows, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].doctor_name, "D0");
        assert_eq!(top_referrers(&rows[..2], 5).len(), 2);
    }

    #[test]
    fn test_calculator_total() {
        let results = vec![
            BonusResult {
                doctor: "Dr. Bat".into(),
                count: 2,
                bonus: 100_000.0,
                patients: vec![],
                period: None,
            },
            BonusResult {
                doctor: "Dr. Saraa".into(),
                count: 1,
                bonus: 50_000.0,
                patients: vec![],
                period: None,
            },
        ];
        assert_eq!(calculator_total(&results), 150_000.0);
    }

    #[test]
    fn test_revenue_chart_ratios_and_labels() {
        let series = vec![
            RevenuePoint {
                label: "Mon".into(),
                total: 200.0,
            },
            RevenuePoint {
                label: "Tue".into(),
                total: 50.0,
            },
        ];
        let chart = RevenueChart::from_series(&series, 250.0);
        assert_eq!(chart.max, 200.0);
        assert_eq!(chart.bars[0].label, "Да");
        assert_eq!(chart.bars[0].ratio, 1.0);
        assert_eq!(chart.bars[1].ratio, 0.25);
    }

    #[test]
    fn test_revenue_chart_all_zero_week() {
        let series = vec![RevenuePoint {
            label: "Sun".into(),
            total: 0.0,
        }];
        let chart = RevenueChart::from_series(&series, 0.0);
        assert_eq!(chart.max, 1.0);
        assert_eq!(chart.bars[0].ratio, 0.0);
        assert!(RevenueChart::from_week(&RevenueWeek::default()).is_empty());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(950.0), "950");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1_250_000.0), "1,250,000");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(-50_000.0), "-50,000");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150_000.0), "150,000 ₮");
    }
}
