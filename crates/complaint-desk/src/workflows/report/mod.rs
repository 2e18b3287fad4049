//! Complaint report: fetch, filter, sort, render and CSV export.

pub mod domain;
mod engine;
pub mod export;
pub mod filter;
pub mod router;
pub mod source;
pub mod views;

pub use domain::{
    display_date, parse_date, ComplaintRecord, ComplaintStatus, ComplaintType, Location,
    UnknownChoice,
};
pub use engine::ReportEngine;
pub use export::{write_report, ExportError, ReportDocument, REPORT_FILE_NAME};
pub use filter::{FilterError, FilterSelection, FilterState, SelectionError, SortKey};
pub use router::report_router;
pub use source::{
    decode_listing, ComplaintSource, HttpComplaintSource, SourceError, StaticComplaintSource,
};
pub use views::{AlertView, ComplaintCard, ReportView, StatusIcon, UserAlert};
