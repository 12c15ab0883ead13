//! Mongolian UI strings.
//!
//! Only strings that code needs to choose between live here; plain page
//! copy belongs to the rendering layer.

/// Navbar labels.
pub const LABEL_HOME: &str = "Нүүр";
pub const LABEL_ADD_PATIENT: &str = "Өвчтөн бүртгэх";
pub const LABEL_VIEW_RECORDS: &str = "Жагсаалт харах";
pub const LABEL_BONUS: &str = "Урамшуулал";
pub const LABEL_LOGIN: &str = "Нэвтрэх";

/// Loading placeholder.
pub const LOADING: &str = "Уншиж байна...";

/// Default error messages, used when the server sends none.
pub const ERR_LOGIN_FAILED: &str = "Login failed";
pub const ERR_ADD_PATIENT: &str = "Өвчтөн нэмэхэд алдаа гарлаа";
pub const ERR_LOAD_RECORDS: &str = "Жагсаалт татахад алдаа гарлаа. Серверийг шалгана уу.";
pub const ERR_CALCULATE_BONUS: &str = "Урамшуулал бодоход алдаа гарлаа";

/// Required-field messages.
pub const REQ_USERNAME: &str = "Хэрэглэгчийн нэр оруулна уу";
pub const REQ_PASSWORD: &str = "Нууц үг оруулна уу";
pub const REQ_NAME: &str = "Нэр оруулна уу";
pub const REQ_ID: &str = "ID оруулна уу";
pub const REQ_AGE: &str = "Нас оруулна уу";
pub const REQ_GENDER: &str = "Хүйс сонгоно уу";
pub const REQ_SCAN_TYPE: &str = "Төрөл оруулна уу";
pub const REQ_SOURCE: &str = "Эх сурвалж сонгоно уу";
pub const REQ_HOSPITAL: &str = "Эмнэлгийн нэр оруулна уу";
pub const REQ_DOCTOR: &str = "Эмчийн нэр оруулна уу";

/// Weekday abbreviations, keyed by the English labels the API sends.
const DAY_LABELS: &[(&str, &str)] = &[
    ("Mon", "Да"),
    ("Tue", "Мя"),
    ("Wed", "Лх"),
    ("Thu", "Пү"),
    ("Fri", "Ба"),
    ("Sat", "Бя"),
    ("Sun", "Ня"),
];

/// Localized day label; unknown labels pass through unchanged.
pub fn day_label(label: &str) -> &str {
    DAY_LABELS
        .iter()
        .find(|(en, _)| *en == label)
        .map(|(_, mn)| *mn)
        .unwrap_or(label)
}
