use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a log entry.
///
/// Stored as its lowercase tag (`"work"`, `"child_sick"`, ...). Tags that are
/// not recognised survive a load/save cycle unchanged as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryType {
    Work,
    Sick,
    FamilySick,
    ParentSick,
    SpouseSick,
    SpouseAbsence,
    ChildSick,
    Vacation,
    Reserve,
    Bereavement,
    Study,
    Other(String),
}

impl EntryType {
    pub const KNOWN: &[EntryType] = &[
        EntryType::Work,
        EntryType::Sick,
        EntryType::FamilySick,
        EntryType::ParentSick,
        EntryType::SpouseSick,
        EntryType::SpouseAbsence,
        EntryType::ChildSick,
        EntryType::Vacation,
        EntryType::Reserve,
        EntryType::Bereavement,
        EntryType::Study,
    ];

    pub fn from_tag(s: &str) -> Self {
        match s {
            "work" => Self::Work,
            "sick" => Self::Sick,
            "family_sick" => Self::FamilySick,
            "parent_sick" => Self::ParentSick,
            "spouse_sick" => Self::SpouseSick,
            "spouse_absence" => Self::SpouseAbsence,
            "child_sick" => Self::ChildSick,
            "vacation" => Self::Vacation,
            "reserve" => Self::Reserve,
            "bereavement" => Self::Bereavement,
            "study" => Self::Study,
            other => Self::Other(other.to_string()),
        }
    }

    /// Strict parse for user input: unknown tags are rejected.
    pub fn parse_known(s: &str) -> Option<Self> {
        match Self::from_tag(&s.trim().to_lowercase()) {
            Self::Other(_) => None,
            t => Some(t),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Work => "work",
            Self::Sick => "sick",
            Self::FamilySick => "family_sick",
            Self::ParentSick => "parent_sick",
            Self::SpouseSick => "spouse_sick",
            Self::SpouseAbsence => "spouse_absence",
            Self::ChildSick => "child_sick",
            Self::Vacation => "vacation",
            Self::Reserve => "reserve",
            Self::Bereavement => "bereavement",
            Self::Study => "study",
            Self::Other(s) => s,
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, Self::Work)
    }

    /// Sick leave and its family sub-categories need a supporting document.
    pub fn requires_attachment(&self) -> bool {
        matches!(
            self,
            Self::Sick
                | Self::FamilySick
                | Self::ParentSick
                | Self::SpouseSick
                | Self::SpouseAbsence
                | Self::ChildSick
        )
    }
}

impl Default for EntryType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for EntryType {
    fn from(s: String) -> Self {
        Self::from_tag(&s)
    }
}

impl From<EntryType> for String {
    fn from(t: EntryType) -> Self {
        t.as_tag().to_string()
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
