use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintType {
    Electricity,
    Carpenter,
    Plumber,
    Garbage,
    Dustbin,
    Internet,
    Other,
}

impl ComplaintType {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Electricity,
            Self::Carpenter,
            Self::Plumber,
            Self::Garbage,
            Self::Dustbin,
            Self::Internet,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Carpenter => "Carpenter",
            Self::Plumber => "Plumber",
            Self::Garbage => "Garbage",
            Self::Dustbin => "Dustbin",
            Self::Internet => "Internet",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ComplaintType {
    type Err = UnknownChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownChoice::new("complaint type", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Hall1,
    Hall3,
    Hall4,
    NagarjunHostel,
    MaaSaraswatiHostel,
    PaniniHostel,
    Lhtc,
    CoreLab,
    Cc1,
    Cc2,
    RewaResidency,
    Nr2,
}

impl Location {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Hall1,
            Self::Hall3,
            Self::Hall4,
            Self::NagarjunHostel,
            Self::MaaSaraswatiHostel,
            Self::PaniniHostel,
            Self::Lhtc,
            Self::CoreLab,
            Self::Cc1,
            Self::Cc2,
            Self::RewaResidency,
            Self::Nr2,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hall1 => "Hall-1",
            Self::Hall3 => "Hall-3",
            Self::Hall4 => "Hall-4",
            Self::NagarjunHostel => "Nagarjun Hostel",
            Self::MaaSaraswatiHostel => "Maa Saraswati Hostel",
            Self::PaniniHostel => "Panini Hostel",
            Self::Lhtc => "LHTC",
            Self::CoreLab => "CORE LAB",
            Self::Cc1 => "CC1",
            Self::Cc2 => "CC2",
            Self::RewaResidency => "Rewa Residency",
            Self::Nr2 => "NR2",
        }
    }
}

impl FromStr for Location {
    type Err = UnknownChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|location| location.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownChoice::new("location", value))
    }
}

/// Known complaint status codes. Code 1 is reserved and never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    Resolved,
    Declined,
}

impl ComplaintStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pending, Self::Resolved, Self::Declined]
    }

    pub const fn code(self) -> i64 {
        match self {
            Self::Pending => 0,
            Self::Resolved => 2,
            Self::Declined => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
            Self::Declined => "Declined",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.code() == code)
    }

    /// Canonical mapping used wherever a record's status is shown or exported.
    /// Unknown and reserved codes read as pending.
    pub fn resolve(code: i64) -> Self {
        Self::from_code(code).unwrap_or(Self::Pending)
    }
}

impl FromStr for ComplaintStatus {
    type Err = UnknownChoice;

    /// Accepts either the numeric code (`"2"`) or the label (`"resolved"`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| UnknownChoice::new("status", value));
        }

        Self::ordered()
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownChoice::new("status", value))
    }
}

/// One complaint as returned by the complaint listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub complaint_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(deserialize_with = "deserialize_complaint_date")]
    pub complaint_date: NaiveDate,
}

impl ComplaintRecord {
    pub fn status(&self) -> ComplaintStatus {
        ComplaintStatus::resolve(self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownChoice {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Formats a date the way the report shows it, e.g. `1/10/2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_complaint_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    None
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_complaint_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_complaint_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized complaint date '{raw}'")))
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
