use chrono::Local;
use clap::Args;
use complaint_desk::config::AppConfig;
use complaint_desk::error::AppError;
use complaint_desk::session::Session;
use complaint_desk::telemetry;
use complaint_desk::workflows::report::{
    AlertView, FilterSelection, HttpComplaintSource, ReportEngine,
};
use complaint_desk::workflows::tabs::{Direction, TabContent, TabRouter, LOADING_PLACEHOLDER};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// API token; falls back to COMPLAINT_AUTH_TOKEN
    #[arg(long)]
    pub(crate) token: Option<String>,
    /// Name printed on the "Generated by" line of the export
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long, default_value = "")]
    pub(crate) role: String,
    /// Override the configured report endpoint
    #[arg(long)]
    pub(crate) endpoint: Option<String>,
    #[arg(long)]
    pub(crate) location: Option<String>,
    #[arg(long)]
    pub(crate) complaint_type: Option<String>,
    /// Pending, Resolved or Declined
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Lower bound, YYYY-MM-DD
    #[arg(long)]
    pub(crate) start_date: Option<String>,
    /// Upper bound, YYYY-MM-DD
    #[arg(long)]
    pub(crate) end_date: Option<String>,
    /// status, mostRecent or mostOlder
    #[arg(long)]
    pub(crate) sort_by: Option<String>,
    /// Write the CSV export to this path
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

impl ReportArgs {
    fn selection(&self) -> FilterSelection {
        FilterSelection {
            location: self.location.clone(),
            complaint_type: self.complaint_type.clone(),
            status: self.status.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            sort_by: self.sort_by.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct TabsArgs {
    /// Role string of the signed-in user, e.g. hall3_caretaker
    #[arg(long)]
    pub(crate) role: String,
    /// Tab index to select before navigating
    #[arg(long, default_value_t = 0)]
    pub(crate) active: usize,
    #[arg(long, conflicts_with = "prev")]
    pub(crate) next: bool,
    #[arg(long)]
    pub(crate) prev: bool,
}

impl TabsArgs {
    fn direction(&self) -> Option<Direction> {
        match (self.next, self.prev) {
            (true, _) => Some(Direction::Next),
            (_, true) => Some(Direction::Prev),
            _ => None,
        }
    }
}

pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(endpoint) = args.endpoint.clone() {
        config.report_source.endpoint = endpoint;
    }
    let filters = args.selection().into_state()?;
    let token = args
        .token
        .clone()
        .or_else(|| config.report_source.default_token.clone())
        .unwrap_or_default();
    let session = Session::new(args.username.clone(), args.role.clone(), token);

    let source = HttpComplaintSource::new(&config.report_source)?;
    let mut engine = ReportEngine::mount(&source, session).await;
    // Rejected ranges surface as an alert below.
    let _ = engine.set_filters(filters);

    let view = engine.render();
    for line in view.filters.describe() {
        println!("{line}");
    }
    println!("Showing {} of {} complaints", view.cards.len(), view.total);
    println!();
    println!("{view}");
    for alert in &view.alerts {
        print_alert(alert);
    }

    if let Some(path) = args.export {
        let document = engine.export(Local::now().naive_local())?;
        std::fs::write(&path, document.body)?;
        info!(path = %path.display(), "complaint report exported");
        println!("Saved {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_tabs(args: TabsArgs) -> Result<(), AppError> {
    let session = Session::new("", args.role.clone(), "");
    let mut router = TabRouter::new(&session);
    router.select(args.active);

    if let Some(direction) = args.direction() {
        let navigation = router.navigate(direction);
        println!("scroll {:+}px", navigation.scroll_by);
    }

    let layout = router.render();
    println!("{} ({})", layout.role, layout.category.label());
    for tab in &layout.tabs {
        let marker = if tab.active { '*' } else { ' ' };
        println!("{marker} [{}] {}", tab.index, tab.title);
    }
    match layout.content {
        TabContent::View(view) => println!("showing: {}", view.title()),
        TabContent::Loading => println!("{LOADING_PLACEHOLDER}"),
    }

    Ok(())
}

fn print_alert(alert: &AlertView) {
    eprintln!("alert: {}", alert.message);
}
