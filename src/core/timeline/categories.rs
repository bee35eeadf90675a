//! Category display table: one colour and one localized label per entry type.

use crate::models::entry_type::EntryType;
use serde::Serialize;

/// Colour used for any type that is not in the table.
pub const DEFAULT_COLOR: &str = "#a0aec0";

const WORK_COLOR: &str = "#4299e1";
const SICK_COLOR: &str = "#f56565";
const VACATION_COLOR: &str = "#48bb78";
const RESERVE_COLOR: &str = "#ed8936";
const BEREAVEMENT_COLOR: &str = "#9f7aea";
const STUDY_COLOR: &str = "#ecc94b";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub color: String,
    pub label: String,
}

fn known(kind: &EntryType) -> Option<(&'static str, &'static str)> {
    let row = match kind {
        EntryType::Work => (WORK_COLOR, "עבודה רגילה"),
        EntryType::Sick => (SICK_COLOR, "מחלה"),
        EntryType::FamilySick => (SICK_COLOR, "מחלה משפחתית"),
        EntryType::ParentSick => (SICK_COLOR, "מחלת הורה"),
        EntryType::SpouseSick => (SICK_COLOR, "מחלת בן/בת זוג"),
        EntryType::SpouseAbsence => (SICK_COLOR, "היעדרות בגין בת זוג"),
        EntryType::ChildSick => (SICK_COLOR, "מחלת ילד"),
        EntryType::Vacation => (VACATION_COLOR, "חופשה"),
        EntryType::Reserve => (RESERVE_COLOR, "מילואים"),
        EntryType::Bereavement => (BEREAVEMENT_COLOR, "אבל"),
        EntryType::Study => (STUDY_COLOR, "ימי השתלמות"),
        EntryType::Other(_) => return None,
    };
    Some(row)
}

/// Resolve the display colour and label for a type.
/// Unknown types get [`DEFAULT_COLOR`] and their raw tag as label.
pub fn resolve(kind: &EntryType) -> CategoryStyle {
    match known(kind) {
        Some((color, label)) => CategoryStyle {
            color: color.to_string(),
            label: label.to_string(),
        },
        None => CategoryStyle {
            color: DEFAULT_COLOR.to_string(),
            label: kind.as_tag().to_string(),
        },
    }
}

pub fn label(kind: &EntryType) -> String {
    resolve(kind).label
}
