//! Record normalizer.
//!
//! Upstream record rows are keyed by spreadsheet headers that were renamed,
//! translated and re-spelled over time (`Name`, `Full Name`, `Овог Нэр`).
//! The normalizer maps every known variant onto one [`PatientRecord`] field
//! so the rest of the client never probes raw keys.
//!
//! Handles:
//! - Header canonicalization (case, `_` vs space, trailing `?`)
//! - Variant precedence (first alias listed wins when several are filled)
//! - Near-miss headers via string similarity

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::PatientRecord;

/// Minimum similarity for a near-miss header to be accepted.
const FUZZY_THRESHOLD: f64 = 0.85;
/// Headers shorter than this are only matched exactly.
const FUZZY_MIN_LEN: usize = 5;
/// Precedence penalty for fuzzy matches, so exact headers always win.
const FUZZY_PENALTY: usize = 100;

/// Canonical record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Date,
    Name,
    NationalId,
    Age,
    Gender,
    Phone,
    ScanType,
    Contrast,
    ClinicalInfo,
    ReferralSource,
    Hospital,
    Department,
    Doctor,
    DoctorPhone,
    Technician,
    CdStatus,
    ResultStatus,
    Radiologist,
    Notes,
    CreatedAt,
}

impl RecordField {
    fn slot<'a>(&self, record: &'a mut PatientRecord) -> &'a mut Option<String> {
        match self {
            RecordField::Date => &mut record.date,
            RecordField::Name => &mut record.name,
            RecordField::NationalId => &mut record.national_id,
            RecordField::Age => &mut record.age,
            RecordField::Gender => &mut record.gender,
            RecordField::Phone => &mut record.phone,
            RecordField::ScanType => &mut record.scan_type,
            RecordField::Contrast => &mut record.contrast,
            RecordField::ClinicalInfo => &mut record.clinical_info,
            RecordField::ReferralSource => &mut record.referral_source,
            RecordField::Hospital => &mut record.hospital,
            RecordField::Department => &mut record.department,
            RecordField::Doctor => &mut record.doctor,
            RecordField::DoctorPhone => &mut record.doctor_phone,
            RecordField::Technician => &mut record.technician,
            RecordField::CdStatus => &mut record.cd_status,
            RecordField::ResultStatus => &mut record.result_status,
            RecordField::Radiologist => &mut record.radiologist,
            RecordField::Notes => &mut record.notes,
            RecordField::CreatedAt => &mut record.created_at,
        }
    }
}

/// Normalizer for upstream record rows.
pub struct RecordNormalizer {
    /// Canonical header → (field, precedence)
    aliases: HashMap<String, (RecordField, usize)>,
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordNormalizer {
    /// Create a normalizer with every header variant seen upstream.
    pub fn new() -> Self {
        let mut normalizer = Self {
            aliases: HashMap::new(),
        };
        for (field, headers) in DEFAULT_ALIASES {
            for header in headers.iter() {
                normalizer.add_alias(header, *field);
            }
        }
        normalizer
    }

    /// Register a header variant. Variants added earlier for the same field
    /// take precedence when a row fills several of them.
    pub fn add_alias(&mut self, header: &str, field: RecordField) {
        let precedence = self
            .aliases
            .values()
            .filter(|(f, _)| *f == field)
            .count();
        self.aliases
            .entry(canonical_header(header))
            .or_insert((field, precedence));
    }

    /// Field a raw header maps to, with its precedence.
    pub fn resolve_header(&self, header: &str) -> Option<(RecordField, usize)> {
        let key = canonical_header(header);
        if let Some(hit) = self.aliases.get(&key) {
            return Some(*hit);
        }
        if key.chars().count() < FUZZY_MIN_LEN {
            return None;
        }

        self.aliases
            .iter()
            .map(|(alias, hit)| (strsim::normalized_levenshtein(&key, alias), alias, hit))
            .filter(|(score, _, _)| *score >= FUZZY_THRESHOLD)
            .max_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // Stable pick among equal scores
                    .then_with(|| b.1.cmp(a.1))
            })
            .map(|(score, alias, (field, precedence))| {
                debug!(header, alias = %alias, score, "Fuzzy header match");
                (*field, precedence + FUZZY_PENALTY)
            })
    }

    /// Normalize one upstream row.
    pub fn normalize(&self, row: &Map<String, Value>) -> PatientRecord {
        let mut record = PatientRecord::default();
        let mut filled: HashMap<RecordField, usize> = HashMap::new();

        for (header, value) in row {
            match self.resolve_header(header) {
                Some((field, precedence)) => {
                    let Some(text) = value_text(value) else {
                        continue;
                    };
                    let better = filled.get(&field).map_or(true, |p| precedence < *p);
                    if better {
                        *field.slot(&mut record) = Some(text);
                        filled.insert(field, precedence);
                    }
                }
                None => {
                    record.extra.insert(header.clone(), value.clone());
                }
            }
        }

        record
    }

    /// Normalize a listing. Entries that are not JSON objects are skipped.
    pub fn normalize_all(&self, rows: &[Value]) -> Vec<PatientRecord> {
        rows.iter()
            .filter_map(Value::as_object)
            .map(|row| self.normalize(row))
            .collect()
    }
}

/// Default header variants, highest precedence first.
const DEFAULT_ALIASES: &[(RecordField, &[&str])] = &[
    (
        RecordField::Date,
        &[
            "Date",
            "Date of Scan",
            "Date of Booking",
            "Шинжилгээнд орох огноо",
            "Шинжилгээ өгөх огноо",
        ],
    ),
    (RecordField::Name, &["Name", "Full Name", "Овог Нэр"]),
    (
        RecordField::NationalId,
        &["ID", "National ID", "Регистр", "Регистр / ID"],
    ),
    (RecordField::Age, &["Age", "Нас"]),
    (RecordField::Gender, &["Gender", "Хүйс"]),
    (
        RecordField::Phone,
        &[
            "Phone Number (Patient)",
            "Patient Phone",
            "Phone Number",
            "Phone",
            "Өвчтөний утас",
        ],
    ),
    (
        RecordField::ScanType,
        &["Scan Type", "Шинжилгээний төрөл"],
    ),
    (
        RecordField::Contrast,
        &["Contrast", "Тодосгогчтой эсэх"],
    ),
    (
        RecordField::ClinicalInfo,
        &["Clinical Info", "Clinical Notes", "Эмнэлзүйн мэдээлэл"],
    ),
    (
        RecordField::ReferralSource,
        &[
            "Source",
            "Referral Source",
            "Илгээсэн эх сурвалж",
            "Эх сурвалж",
        ],
    ),
    (
        RecordField::Hospital,
        &["Hospital", "Эмнэлэг", "Эмнэлгийн нэр"],
    ),
    (RecordField::Department, &["Department", "Тасаг"]),
    (
        RecordField::Doctor,
        &["Doctor", "Doctor Name", "Эмчийн нэр"],
    ),
    (
        RecordField::DoctorPhone,
        &["Phone Number (Doctor)", "Doctor Phone", "Эмчийн утас"],
    ),
    (
        RecordField::Technician,
        &["Technician", "Technician Name", "Техникчийн нэр"],
    ),
    (
        RecordField::CdStatus,
        &["CD Status", "CD Хүлээлгэн өгсөн"],
    ),
    (
        RecordField::ResultStatus,
        &[
            "Result Out",
            "Result Status",
            "Status",
            "Хариу гарсан эсэх",
            "Хариу гарсан",
        ],
    ),
    (
        RecordField::Radiologist,
        &["Radiologist Name", "Дүгнэлт гаргах эмчийн нэр"],
    ),
    (RecordField::Notes, &["Notes", "Тэмдэглэл"]),
    (RecordField::CreatedAt, &["Created At"]),
];

/// Lowercase, `_` → space, collapse whitespace, drop a trailing `?`.
fn canonical_header(header: &str) -> String {
    let spaced = header.replace('_', " ").to_lowercase();
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches('?').trim_end().to_string()
}

/// Display text of a cell; empty cells count as missing.
fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_canonical_header() {
        assert_eq!(canonical_header("Scan_Type"), "scan type");
        assert_eq!(canonical_header("  Full   Name "), "full name");
        assert_eq!(canonical_header("Contrast?"), "contrast");
    }

    #[test]
    fn test_normalize_old_and_new_headers_agree() {
        let normalizer = RecordNormalizer::new();

        let old = normalizer.normalize(&row(json!({
            "Name": "Болд",
            "ID": "УБ90010101",
            "Scan_Type": "MRI Тархи",
            "Result_Out": "Тийм",
            "Source": "Эмнэлэг",
            "Doctor": "Дорж"
        })));
        let new = normalizer.normalize(&row(json!({
            "Full Name": "Болд",
            "National ID": "УБ90010101",
            "Scan Type": "MRI Тархи",
            "Result Status": "Тийм",
            "Referral Source": "Эмнэлэг",
            "Doctor Name": "Дорж"
        })));

        assert_eq!(old, new);
        assert_eq!(new.name.as_deref(), Some("Болд"));
        assert!(new.is_result_out());
    }

    #[test]
    fn test_precedence_prefers_earlier_alias() {
        let normalizer = RecordNormalizer::new();
        let record = normalizer.normalize(&row(json!({
            "Date of Booking": "2024-01-01",
            "Date of Scan": "2024-01-03",
        })));
        assert_eq!(record.date.as_deref(), Some("2024-01-03"));

        // Empty higher-precedence cells do not shadow filled ones
        let record = normalizer.normalize(&row(json!({
            "Date": "",
            "Date of Booking": "2024-01-01",
        })));
        assert_eq!(record.date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_numbers_become_text() {
        let normalizer = RecordNormalizer::new();
        let record = normalizer.normalize(&row(json!({ "Age": 42, "Нас": null })));
        assert_eq!(record.age.as_deref(), Some("42"));
    }

    #[test]
    fn test_unknown_columns_kept_in_extra() {
        let normalizer = RecordNormalizer::new();
        let record = normalizer.normalize(&row(json!({
            "Name": "Бат",
            "Scan Quality/Notes": "Good",
        })));
        assert_eq!(record.extra.get("Scan Quality/Notes"), Some(&json!("Good")));
    }

    #[test]
    fn test_fuzzy_header_match() {
        let normalizer = RecordNormalizer::new();
        let record = normalizer.normalize(&row(json!({
            "Referal Source": "Facebook",
            "Doctor Nam": "Дорж",
        })));
        assert_eq!(record.referral_source.as_deref(), Some("Facebook"));
        assert_eq!(record.doctor.as_deref(), Some("Дорж"));
    }

    #[test]
    fn test_exact_match_beats_fuzzy() {
        let normalizer = RecordNormalizer::new();
        let record = normalizer.normalize(&row(json!({
            "Referal Source": "Facebook",
            "Source": "Өөрөө",
        })));
        assert_eq!(record.referral_source.as_deref(), Some("Өөрөө"));
    }

    #[test]
    fn test_short_headers_not_fuzzy_matched() {
        let normalizer = RecordNormalizer::new();
        assert!(normalizer.resolve_header("Dat").is_none());
        assert!(normalizer.resolve_header("Nam").is_none());
    }

    #[test]
    fn test_custom_alias() {
        let mut normalizer = RecordNormalizer::new();
        normalizer.add_alias("Patient", RecordField::Name);
        let record = normalizer.normalize(&row(json!({ "Patient": "Сараа" })));
        assert_eq!(record.name.as_deref(), Some("Сараа"));
    }

    #[test]
    fn test_normalize_all_skips_non_objects() {
        let normalizer = RecordNormalizer::new();
        let rows = vec![json!({"Name": "A"}), json!("garbage"), json!({"Full Name": "B"})];
        let records = normalizer.normalize_all(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name.as_deref(), Some("B"));
    }
}
