use super::domain::{display_date, ComplaintRecord, ComplaintStatus};
use super::filter::FilterState;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const EMPTY_PLACEHOLDER: &str = "No complaints found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Resolved,
    Declined,
    Detail,
}

impl StatusIcon {
    pub const fn for_status(status: ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Resolved => Self::Resolved,
            ComplaintStatus::Declined => Self::Declined,
            ComplaintStatus::Pending => Self::Detail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintCard {
    pub id: i64,
    pub complaint_type: String,
    pub status: ComplaintStatus,
    pub status_label: &'static str,
    pub icon: StatusIcon,
    pub complaint_date: NaiveDate,
    pub date_label: String,
    pub location: String,
    pub details: String,
}

impl ComplaintCard {
    pub fn from_record(record: &ComplaintRecord) -> Self {
        let status = record.status();
        Self {
            id: record.id,
            complaint_type: record.complaint_type.clone(),
            status,
            status_label: status.label(),
            icon: StatusIcon::for_status(status),
            complaint_date: record.complaint_date,
            date_label: display_date(record.complaint_date),
            location: record.location.clone(),
            details: record.details.clone(),
        }
    }
}

impl fmt::Display for ComplaintCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Complaint Id: {} [{}] ({})",
            self.id, self.complaint_type, self.status_label
        )?;
        writeln!(f, "  Date: {}", self.date_label)?;
        writeln!(f, "  Location: {}", self.location)?;
        write!(f, "  Details: {}", self.details)
    }
}

/// Messages the user must acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAlert {
    FetchFailed,
    InvalidDateRange,
}

impl UserAlert {
    pub const fn message(self) -> &'static str {
        match self {
            Self::FetchFailed => {
                "There was an error fetching the complaint data. Please try again later."
            }
            Self::InvalidDateRange => "Start date cannot be later than end date.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub kind: UserAlert,
    pub message: &'static str,
}

impl From<UserAlert> for AlertView {
    fn from(kind: UserAlert) -> Self {
        Self {
            kind,
            message: kind.message(),
        }
    }
}

/// Everything needed to draw the report screen.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub filters: FilterState,
    pub total: usize,
    pub cards: Vec<ComplaintCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<AlertView>,
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(placeholder) = self.placeholder {
            return write!(f, "{placeholder}");
        }

        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: i64) -> ComplaintRecord {
        ComplaintRecord {
            id: 9,
            complaint_type: "Carpenter".to_string(),
            location: "Panini Hostel".to_string(),
            details: "Broken door hinge".to_string(),
            status,
            complaint_date: NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
        }
    }

    #[test]
    fn card_icon_follows_status() {
        assert_eq!(ComplaintCard::from_record(&record(2)).icon, StatusIcon::Resolved);
        assert_eq!(ComplaintCard::from_record(&record(3)).icon, StatusIcon::Declined);
        assert_eq!(ComplaintCard::from_record(&record(0)).icon, StatusIcon::Detail);
    }

    #[test]
    fn unknown_status_renders_as_pending() {
        let card = ComplaintCard::from_record(&record(7));
        assert_eq!(card.status, ComplaintStatus::Pending);
        assert_eq!(card.status_label, "Pending");
        assert_eq!(card.icon, StatusIcon::Detail);
    }

    #[test]
    fn card_text_includes_formatted_date() {
        let text = ComplaintCard::from_record(&record(0)).to_string();
        assert!(text.starts_with("Complaint Id: 9 [Carpenter] (Pending)"));
        assert!(text.contains("Date: 4/3/2024"));
        assert!(text.contains("Location: Panini Hostel"));
    }
}
