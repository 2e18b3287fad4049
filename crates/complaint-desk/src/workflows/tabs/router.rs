use axum::{
    extract::{rejection::QueryRejection, Query},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::layout::{Direction, Navigation, TabLayoutView, TabRouter};
use crate::error::AppError;
use crate::session::Session;

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    #[serde(default)]
    pub active: Option<usize>,
    #[serde(default)]
    pub direction: Option<Direction>,
}

#[derive(Debug, serde::Serialize)]
pub struct TabResponse {
    #[serde(flatten)]
    pub layout: TabLayoutView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
}

pub fn tab_router() -> Router {
    Router::new().route("/api/v1/complaints/tabs", get(tabs_handler))
}

pub(crate) async fn tabs_handler(
    headers: HeaderMap,
    query: Result<Query<TabQuery>, QueryRejection>,
) -> Result<Json<TabResponse>, AppError> {
    let Query(query) = query?;
    let session = Session::from_headers(&headers);
    let mut router = TabRouter::new(&session);
    if let Some(active) = query.active {
        router.select(active);
    }
    let navigation = query.direction.map(|direction| router.navigate(direction));

    Ok(Json(TabResponse {
        layout: router.render(),
        navigation,
    }))
}
