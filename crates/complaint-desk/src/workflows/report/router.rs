use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;

use super::engine::ReportEngine;
use super::filter::FilterSelection;
use super::source::ComplaintSource;
use super::views::ReportView;
use crate::error::AppError;
use crate::session::Session;

/// Router exposing the filtered report view and its CSV download.
pub fn report_router<S>(source: Arc<S>) -> Router
where
    S: ComplaintSource + 'static,
{
    Router::new()
        .route("/api/v1/complaints/report", get(report_handler::<S>))
        .route(
            "/api/v1/complaints/report/export",
            get(export_handler::<S>),
        )
        .with_state(source)
}

async fn load_engine<S>(
    source: &S,
    headers: &HeaderMap,
    selection: FilterSelection,
) -> Result<ReportEngine, AppError>
where
    S: ComplaintSource,
{
    let filters = selection.into_state()?;
    let mut engine = ReportEngine::mount(source, Session::from_headers(headers)).await;
    // An inverted range is reported through the view's alerts.
    let _ = engine.set_filters(filters);
    Ok(engine)
}

pub(crate) async fn report_handler<S>(
    State(source): State<Arc<S>>,
    headers: HeaderMap,
    selection: Result<Query<FilterSelection>, QueryRejection>,
) -> Result<Json<ReportView>, AppError>
where
    S: ComplaintSource + 'static,
{
    let Query(selection) = selection?;
    let engine = load_engine(source.as_ref(), &headers, selection).await?;
    Ok(Json(engine.render()))
}

pub(crate) async fn export_handler<S>(
    State(source): State<Arc<S>>,
    headers: HeaderMap,
    selection: Result<Query<FilterSelection>, QueryRejection>,
) -> Result<Response, AppError>
where
    S: ComplaintSource + 'static,
{
    let Query(selection) = selection?;
    let engine = load_engine(source.as_ref(), &headers, selection).await?;
    let document = engine.export(Local::now().naive_local())?;

    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(document.content_type),
        ),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition).unwrap_or_else(|_| {
                HeaderValue::from_static("attachment")
            }),
        ),
    ];

    Ok((StatusCode::OK, headers, document.body).into_response())
}
