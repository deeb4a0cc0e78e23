use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a calendar exception
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    National,
    Regional,
    Observance,
}

impl HolidayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::National => "NATIONAL",
            HolidayType::Regional => "REGIONAL",
            HolidayType::Observance => "OBSERVANCE",
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Holiday record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    #[serde(default)]
    pub lob_id: Option<i64>,
    #[serde(default)]
    pub loc_id: Option<i64>,
}

/// Create payload for a holiday.
///
/// `lob_id`/`loc_id` are always present on the wire; `null` means the
/// holiday applies to every line of business / location. An absent
/// description is omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHoliday {
    pub name: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    pub lob_id: Option<i64>,
    pub loc_id: Option<i64>,
}
