//! Golden tests for record normalization.
//!
//! Rows below mirror the header styles seen across revisions of the records
//! sheet: English, Mongolian and snake_case.

use meditrack_core::RecordNormalizer;
use serde_json::json;

struct GoldenCase {
    id: &'static str,
    row: serde_json::Value,
    name: Option<&'static str>,
    national_id: Option<&'static str>,
    scan_type: Option<&'static str>,
    status: &'static str,
}

fn golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "english-headers",
            row: json!({
                "Name": "Bold Bat",
                "ID": "UB99010101",
                "Scan Type": "MRI Brain",
                "Result Out": "Yes"
            }),
            name: Some("Bold Bat"),
            national_id: Some("UB99010101"),
            scan_type: Some("MRI Brain"),
            status: "Yes",
        },
        GoldenCase {
            id: "mongolian-headers",
            row: json!({
                "Овог Нэр": "Сараа",
                "Регистр": "УБ88020202",
                "Шинжилгээний төрөл": "CT Head",
                "Хариу гарсан эсэх": "Тийм"
            }),
            name: Some("Сараа"),
            national_id: Some("УБ88020202"),
            scan_type: Some("CT Head"),
            status: "Тийм",
        },
        GoldenCase {
            id: "snake-case-headers",
            row: json!({
                "full_name": "Tuya",
                "national_id": "UB77030303",
                "scan_type": "X-Ray"
            }),
            name: Some("Tuya"),
            national_id: Some("UB77030303"),
            scan_type: Some("X-Ray"),
            status: "Pending",
        },
        GoldenCase {
            id: "earlier-variant-wins",
            row: json!({
                "Full Name": "Second",
                "Name": "First",
                "Status": "Completed",
                "Result Out": ""
            }),
            name: Some("First"),
            national_id: None,
            scan_type: None,
            status: "Completed",
        },
        GoldenCase {
            id: "empty-row",
            row: json!({}),
            name: None,
            national_id: None,
            scan_type: None,
            status: "Pending",
        },
    ]
}

#[test]
fn test_golden_rows() {
    let normalizer = RecordNormalizer::new();
    for case in golden_cases() {
        let row = case.row.as_object().unwrap();
        let record = normalizer.normalize(row);
        assert_eq!(record.name.as_deref(), case.name, "{}: name", case.id);
        assert_eq!(
            record.national_id.as_deref(),
            case.national_id,
            "{}: national id",
            case.id
        );
        assert_eq!(record.scan_type.as_deref(), case.scan_type, "{}: scan type", case.id);
        assert_eq!(record.display_status(), case.status, "{}: status", case.id);
    }
}

#[test]
fn test_normalize_listing_skips_non_objects() {
    let rows = vec![json!({"Name": "A"}), json!("garbage"), json!({"Name": "B"})];
    let records = RecordNormalizer::new().normalize_all(&rows);
    let names: Vec<_> = records.iter().filter_map(|r| r.name.as_deref()).collect();
    assert_eq!(names, vec!["A", "B"]);
}
