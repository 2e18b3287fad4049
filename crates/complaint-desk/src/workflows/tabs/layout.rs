use super::role::RoleCategory;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Pixels the tab strip scrolls per previous/next click.
pub const SCROLL_STEP_PX: i32 = 50;

pub const LOADING_PLACEHOLDER: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintView {
    LodgeComplaint,
    ComplaintHistory,
    Feedback,
    ResolvedComplaints,
    UnresolvedComplaints,
    RedirectedComplaints,
    GenerateReport,
}

impl ComplaintView {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::LodgeComplaint,
            Self::ComplaintHistory,
            Self::Feedback,
            Self::ResolvedComplaints,
            Self::UnresolvedComplaints,
            Self::RedirectedComplaints,
            Self::GenerateReport,
        ]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::LodgeComplaint => "Lodge a Complaint",
            Self::ComplaintHistory => "Complaint History",
            Self::Feedback => "Feedback",
            Self::ResolvedComplaints => "Resolved Complaints",
            Self::UnresolvedComplaints => "Unresolved Complaints",
            Self::RedirectedComplaints => "Redirected Complaints",
            Self::GenerateReport => "Generate Report",
        }
    }
}

/// Ordered tabs offered to each role category.
pub const fn tabs_for(category: RoleCategory) -> &'static [ComplaintView] {
    use ComplaintView::*;

    match category {
        RoleCategory::ComplaintAdmin
        | RoleCategory::Supervisor
        | RoleCategory::ServiceAuthority => &[GenerateReport],
        RoleCategory::ServiceProvider => &[RedirectedComplaints, GenerateReport],
        RoleCategory::Caretaker => &[
            LodgeComplaint,
            ComplaintHistory,
            ResolvedComplaints,
            UnresolvedComplaints,
            GenerateReport,
        ],
        RoleCategory::Resident => &[LodgeComplaint, ComplaintHistory, Feedback],
    }
}

/// Views the host is able to construct. A tab whose view is missing here
/// shows the loading placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSet {
    available: BTreeSet<ComplaintView>,
}

impl ViewSet {
    pub fn all() -> Self {
        ComplaintView::ordered().into_iter().collect()
    }

    pub fn contains(&self, view: ComplaintView) -> bool {
        self.available.contains(&view)
    }
}

impl Default for ViewSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<ComplaintView> for ViewSet {
    fn from_iter<I: IntoIterator<Item = ComplaintView>>(iter: I) -> Self {
        Self {
            available: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

/// Outcome of a previous/next click. The scroll is requested even when the
/// index is already at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub index: usize,
    pub scroll_by: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "view", rename_all = "snake_case")]
pub enum TabContent {
    View(ComplaintView),
    Loading,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabEntry {
    pub index: usize,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabLayoutView {
    pub role: String,
    pub category: RoleCategory,
    pub active: usize,
    pub tabs: Vec<TabEntry>,
    pub content: TabContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// Tab strip state for the complaint module.
#[derive(Debug, Clone)]
pub struct TabRouter {
    role: String,
    category: RoleCategory,
    views: ViewSet,
    active: usize,
}

impl TabRouter {
    pub fn new(session: &Session) -> Self {
        Self::with_views(session, ViewSet::all())
    }

    pub fn with_views(session: &Session, views: ViewSet) -> Self {
        let category = RoleCategory::classify(&session.role);
        debug!(role = %session.role, ?category, "complaint module tabs selected");

        Self {
            role: session.role.clone(),
            category,
            views,
            active: 0,
        }
    }

    pub fn category(&self) -> RoleCategory {
        self.category
    }

    pub fn tabs(&self) -> &'static [ComplaintView] {
        tabs_for(self.category)
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.tabs().iter().map(|view| view.title()).collect()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Selects a tab directly, as a click on the strip does. The index is not
    /// clamped; an index without a tab mounts the loading placeholder.
    pub fn select(&mut self, index: usize) {
        self.active = index;
    }

    pub fn navigate(&mut self, direction: Direction) -> Navigation {
        let last = self.tabs().len().saturating_sub(1);
        let (index, scroll_by) = match direction {
            Direction::Next => ((self.active + 1).min(last), SCROLL_STEP_PX),
            Direction::Prev => (self.active.saturating_sub(1), -SCROLL_STEP_PX),
        };
        self.active = index;
        Navigation { index, scroll_by }
    }

    pub fn next(&mut self) -> Navigation {
        self.navigate(Direction::Next)
    }

    pub fn prev(&mut self) -> Navigation {
        self.navigate(Direction::Prev)
    }

    pub fn mounted(&self) -> TabContent {
        match self.tabs().get(self.active) {
            Some(view) if self.views.contains(*view) => TabContent::View(*view),
            _ => TabContent::Loading,
        }
    }

    pub fn render(&self) -> TabLayoutView {
        let tabs = self
            .tabs()
            .iter()
            .enumerate()
            .map(|(index, view)| TabEntry {
                index,
                title: view.title(),
                active: index == self.active,
            })
            .collect();
        let content = self.mounted();
        let placeholder = (content == TabContent::Loading).then_some(LOADING_PLACEHOLDER);

        TabLayoutView {
            role: self.role.clone(),
            category: self.category,
            active: self.active,
            tabs,
            content,
            placeholder,
        }
    }
}
