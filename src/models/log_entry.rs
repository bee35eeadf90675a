use super::entry_type::EntryType;
use crate::utils::time::{minutes_between, parse_time};
use chrono::{NaiveDate, NaiveTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One work-log record, in the shape persisted under the `workLogs` key.
///
/// Date and times are kept as the raw strings that were stored: imported or
/// hand-edited data may not parse, and callers decide how to degrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(rename = "start-time", default, deserialize_with = "lenient_string")]
    pub start_time: String,
    #[serde(rename = "end-time", default, deserialize_with = "lenient_string")]
    pub end_time: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: EntryType,
    #[serde(default, deserialize_with = "lenient_string")]
    pub client: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(
        rename = "attachmentName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attachment_name: Option<String>,
}

/// Accept hand-edited values: null reads as empty, numbers and booleans as their text.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EntryType, D::Error> {
    lenient_string(deserializer).map(EntryType::from)
}

impl LogEntry {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        kind: EntryType,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.format("%Y-%m-%d").to_string(),
            start_time: start.format("%H:%M").to_string(),
            end_time: end.format("%H:%M").to_string(),
            kind,
            client: String::new(),
            location: String::new(),
            attachment_name: None,
        }
    }

    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn start(&self) -> Option<NaiveTime> {
        parse_time(&self.start_time)
    }

    pub fn end(&self) -> Option<NaiveTime> {
        parse_time(&self.end_time)
    }

    /// Signed duration; negative for inverted ranges, `None` if either time is unparsable.
    pub fn duration_minutes(&self) -> Option<i64> {
        Some(minutes_between(self.start()?, self.end()?))
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.day() == Some(date)
    }
}
