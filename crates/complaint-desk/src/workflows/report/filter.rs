use super::domain::{
    parse_date, ComplaintRecord, ComplaintStatus, ComplaintType, Location, UnknownChoice,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Ordering applied after the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Status,
    MostRecent,
    MostOlder,
}

impl SortKey {
    pub const fn ordered() -> [Self; 3] {
        [Self::Status, Self::MostRecent, Self::MostOlder]
    }

    /// Value used by the sort selector, e.g. `mostRecent`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::MostRecent => "mostRecent",
            Self::MostOlder => "mostOlder",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::MostRecent => "Most Recent",
            Self::MostOlder => "Most Older",
        }
    }

    fn sort(self, records: &mut [ComplaintRecord]) {
        match self {
            Self::Status => records.sort_by_key(|record| record.status),
            Self::MostRecent => {
                records.sort_by(|a, b| b.complaint_date.cmp(&a.complaint_date))
            }
            Self::MostOlder => records.sort_by_key(|record| record.complaint_date),
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|key| {
                key.key().eq_ignore_ascii_case(trimmed) || key.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownChoice {
                kind: "sort key",
                value: value.to_string(),
            })
    }
}

/// User-selected criteria. Every field is optional and unset by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub location: Option<Location>,
    pub complaint_type: Option<ComplaintType>,
    pub status: Option<ComplaintStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_by: Option<SortKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("start date {start} is later than end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start > end => {
                Err(FilterError::InvalidDateRange { start, end })
            }
            _ => Ok(()),
        }
    }

    pub fn matches(&self, record: &ComplaintRecord) -> bool {
        if let Some(location) = self.location {
            if !record.location.eq_ignore_ascii_case(location.label()) {
                return false;
            }
        }

        if let Some(kind) = self.complaint_type {
            if !record.complaint_type.eq_ignore_ascii_case(kind.label()) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if record.status != status.code() {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if record.complaint_date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if record.complaint_date > end {
                return false;
            }
        }

        true
    }

    /// Runs the filter chain and sort over `records`, leaving the input untouched.
    pub fn apply(&self, records: &[ComplaintRecord]) -> Result<Vec<ComplaintRecord>, FilterError> {
        self.validate()?;

        let mut filtered: Vec<ComplaintRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        if let Some(key) = self.sort_by {
            key.sort(&mut filtered);
        }

        Ok(filtered)
    }

    /// Human-readable lines for every criterion that is set, in report order.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(kind) = self.complaint_type {
            lines.push(format!("Complaint Type: {}", kind.label()));
        }
        if let Some(location) = self.location {
            lines.push(format!("Location: {}", location.label()));
        }
        if let Some(status) = self.status {
            lines.push(format!("Status: {}", status.label()));
        }
        if let Some(start) = self.start_date {
            lines.push(format!("From Date: {}", start.format("%Y-%m-%d")));
        }
        if let Some(end) = self.end_date {
            lines.push(format!("To Date: {}", end.format("%Y-%m-%d")));
        }

        lines
    }
}

/// Raw selector values as they arrive from a query string or the command line.
/// Empty strings mean "unset".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSelection {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub complaint_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error(transparent)]
    Choice(#[from] UnknownChoice),
    #[error("{0}")]
    Date(String),
}

impl FilterSelection {
    pub fn into_state(self) -> Result<FilterState, SelectionError> {
        Ok(FilterState {
            location: parse_optional(self.location)?,
            complaint_type: parse_optional(self.complaint_type)?,
            status: parse_optional(self.status)?,
            start_date: parse_optional_date(self.start_date)?,
            end_date: parse_optional_date(self.end_date)?,
            sort_by: parse_optional(self.sort_by)?,
        })
    }
}

fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, SelectionError>
where
    T: FromStr<Err = UnknownChoice>,
{
    non_blank(value)
        .map(|raw| raw.parse::<T>())
        .transpose()
        .map_err(SelectionError::from)
}

fn parse_optional_date(value: Option<String>) -> Result<Option<NaiveDate>, SelectionError> {
    non_blank(value)
        .map(|raw| parse_date(&raw))
        .transpose()
        .map_err(SelectionError::Date)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_blank(opt))
}
