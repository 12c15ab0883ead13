//! Report aggregation properties.

use meditrack_core::models::{BonusRow, RevenuePoint};
use meditrack_core::reports::{format_number, top_referrers, BonusSummary, RevenueChart};
use proptest::prelude::*;
use serde_json::json;

fn rows_strategy() -> impl Strategy<Value = Vec<BonusRow>> {
    prop::collection::vec((0u64..50, 0u32..40), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (count, units))| BonusRow {
                doctor_id: json!(i),
                doctor_name: format!("Dr. {i}"),
                hospital: String::new(),
                exam_count: count,
                total_bonus: f64::from(units) * 50_000.0,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_summary_matches_row_sums(rows in rows_strategy()) {
        let summary = BonusSummary::from_rows(&rows);
        prop_assert_eq!(summary.doctors, rows.len());
        prop_assert_eq!(summary.total_exams, rows.iter().map(|r| r.exam_count).sum::<u64>());
        let expected: f64 = rows.iter().map(|r| r.total_bonus).sum();
        prop_assert!((summary.total_bonus - expected).abs() < 1e-6);
    }

    #[test]
    fn prop_top_referrers_is_a_prefix(rows in rows_strategy(), n in 0usize..10) {
        let top = top_referrers(&rows, n);
        prop_assert_eq!(top.len(), rows.len().min(n));
        prop_assert_eq!(top, &rows[..top.len()]);
    }

    #[test]
    fn prop_revenue_ratios_are_bounded(totals in prop::collection::vec(0.0f64..1e7, 0..7)) {
        let series: Vec<RevenuePoint> = totals
            .iter()
            .map(|t| RevenuePoint { label: "Mon".into(), total: *t })
            .collect();
        let chart = RevenueChart::from_series(&series, totals.iter().sum());
        prop_assert!(chart.max >= 1.0);
        for bar in &chart.bars {
            prop_assert!((0.0..=1.0).contains(&bar.ratio));
        }
    }

    #[test]
    fn prop_format_number_round_trips_integers(n in 0u64..10_000_000_000) {
        let text = format_number(n as f64);
        prop_assert_eq!(text.replace(',', "").parse::<u64>().unwrap(), n);
        for group in text.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
