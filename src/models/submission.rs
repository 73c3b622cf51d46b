use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body of an inbound submission. Unknown keys are ignored.
///
/// Only presence is checked: each field holds whatever JSON value the caller
/// sent, `null` included.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub name: Value,
    pub email: Value,
    pub message: Value,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

impl Submission {
    pub fn new(form: ContactForm) -> Self {
        Self::at(form, Utc::now())
    }

    pub fn at(form: ContactForm, now: DateTime<Utc>) -> Self {
        Submission {
            id: Uuid::new_v4().to_string(),
            name: form.name,
            email: form.email,
            message: form.message,
            submitted_at: format_submitted_at(now),
        }
    }
}

/// ISO-8601 in UTC without an offset suffix. Microseconds are omitted when zero.
pub fn format_submitted_at(now: DateTime<Utc>) -> String {
    let naive = now.naive_utc();
    if naive.nanosecond() / 1_000 == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
