use super::domain::ComplaintRecord;
use super::export::{write_report, ExportError, ReportDocument};
use super::filter::{FilterError, FilterState};
use super::source::ComplaintSource;
use super::views::{AlertView, ComplaintCard, ReportView, UserAlert, EMPTY_PLACEHOLDER};
use crate::session::Session;
use chrono::NaiveDateTime;
use tracing::{error, info, warn};

/// State behind the report screen: the fetched listing, the active filters,
/// and the view derived from both.
#[derive(Debug)]
pub struct ReportEngine {
    session: Session,
    records: Vec<ComplaintRecord>,
    filters: FilterState,
    view: Vec<ComplaintRecord>,
    alerts: Vec<UserAlert>,
}

impl ReportEngine {
    /// Engine over an already known listing.
    pub fn with_records(session: Session, records: Vec<ComplaintRecord>) -> Self {
        let mut engine = Self {
            session,
            records: Vec::new(),
            filters: FilterState::default(),
            view: Vec::new(),
            alerts: Vec::new(),
        };
        engine.replace_records(records);
        engine
    }

    /// Fetches the listing once. A failed fetch leaves the listing empty and
    /// queues a [`UserAlert::FetchFailed`].
    pub async fn mount<S>(source: &S, session: Session) -> Self
    where
        S: ComplaintSource,
    {
        match source.fetch_complaints(&session).await {
            Ok(records) => {
                info!(count = records.len(), user = %session.username, "complaint listing loaded");
                Self::with_records(session, records)
            }
            Err(err) => {
                error!(error = %err, user = %session.username, "failed to fetch complaint listing");
                let mut engine = Self::with_records(session, Vec::new());
                engine.alerts.push(UserAlert::FetchFailed);
                engine
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn records(&self) -> &[ComplaintRecord] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view(&self) -> &[ComplaintRecord] {
        &self.view
    }

    pub fn alerts(&self) -> &[UserAlert] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<UserAlert> {
        std::mem::take(&mut self.alerts)
    }

    /// Replaces the listing and recomputes the view against the current filters.
    pub fn replace_records(&mut self, records: Vec<ComplaintRecord>) {
        self.view = records.clone();
        self.records = records;
        // The view was just reset, so a rejected range leaves the full listing.
        let _ = self.recompute();
    }

    /// Stores `filters` and recomputes the view. On an inverted date range the
    /// previous view stays in place and an alert is queued.
    pub fn set_filters(&mut self, filters: FilterState) -> Result<&[ComplaintRecord], FilterError> {
        self.filters = filters;
        self.recompute()?;
        Ok(&self.view)
    }

    pub fn update_filters<F>(&mut self, update: F) -> Result<&[ComplaintRecord], FilterError>
    where
        F: FnOnce(&mut FilterState),
    {
        let mut filters = self.filters.clone();
        update(&mut filters);
        self.set_filters(filters)
    }

    fn recompute(&mut self) -> Result<(), FilterError> {
        match self.filters.apply(&self.records) {
            Ok(view) => {
                self.view = view;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "filters not applied");
                self.alerts.push(UserAlert::InvalidDateRange);
                Err(err)
            }
        }
    }

    pub fn render(&self) -> ReportView {
        let cards: Vec<ComplaintCard> = self.view.iter().map(ComplaintCard::from_record).collect();
        let placeholder = cards.is_empty().then_some(EMPTY_PLACEHOLDER);

        ReportView {
            filters: self.filters.clone(),
            total: self.records.len(),
            cards,
            placeholder,
            alerts: self.alerts.iter().copied().map(AlertView::from).collect(),
        }
    }

    /// CSV export of the current view, attributed to the session user.
    pub fn export(&self, generated_at: NaiveDateTime) -> Result<ReportDocument, ExportError> {
        write_report(
            &self.view,
            &self.filters,
            &self.session.username,
            generated_at,
        )
    }
}
