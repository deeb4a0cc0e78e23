use serde::{Deserialize, Serialize};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Destructive,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Destructive => "destructive",
        }
    }
}

/// A transient, user-visible notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn date_required() -> Self {
        Self::destructive("Date Required", "Please select a date for the holiday.")
    }

    pub fn name_required() -> Self {
        Self::destructive("Name Required", "Please enter a name for the holiday.")
    }

    pub fn invalid_date() -> Self {
        Self::destructive("Invalid Date", "Holiday date cannot be in the past.")
    }

    pub fn holiday_created(name: &str) -> Self {
        Self::success(
            "Holiday Created",
            format!("{} has been added to the calendar.", name),
        )
    }

    /// Failure notification for a create attempt; the description carries
    /// the backend's message verbatim.
    pub fn holiday_failed(message: impl Into<String>) -> Self {
        Self::destructive("Failed to Create Holiday", message)
    }
}
