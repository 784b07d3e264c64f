use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bridge_core::geometry::{
    overall_width, solve, solver::girder_count_from_f64, GeometryError, GeometryField, GeometryInput,
};
use bridge_core::location::{LocationData, LookupError, Region, RegionDirectory};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

// Application State
pub struct AppState {
    directory: Arc<dyn RegionDirectory>,
}

impl AppState {
    pub fn new<D: RegionDirectory + 'static>(directory: D) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/", get(root))
        .route("/api/states/", get(list_states))
        .route("/api/districts/", get(list_districts))
        .route("/api/districts/:id/location_data/", get(location_data))
        .route("/api/calculate-geometry/", post(calculate_geometry))
        .with_state(state)
}

/// Failure reported to the form. Validation failures carry one message per field.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    Validation(BTreeMap<String, String>),
    NotFound(String),
    Unavailable(String),
}

impl ApiError {
    fn field(key: &str, message: impl Into<String>) -> Self {
        Self::Validation(BTreeMap::from([(key.to_string(), message.into())]))
    }
}

impl From<GeometryError> for ApiError {
    fn from(e: GeometryError) -> Self {
        let key = match (&e, e.field()) {
            (_, Some(field)) => field.key(),
            (GeometryError::InvalidCarriageway(_), None) => "carriageway_width",
            (_, None) => "non_field_errors",
        };
        Self::field(key, e.to_string())
    }
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::UnknownState(_) | LookupError::UnknownDistrict(_) => Self::NotFound(e.to_string()),
            LookupError::Unavailable(_) => Self::Unavailable(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "errors": errors })),
            )
                .into_response(),
            Self::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "success": false, "detail": detail })),
            )
                .into_response(),
            Self::Unavailable(detail) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "success": false, "detail": detail })),
            )
                .into_response(),
        }
    }
}

async fn root() -> &'static str {
    "Hello from Bridge Design Backend!"
}

async fn list_states(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Region>>, ApiError> {
    let states = state.directory.states()?;
    Ok(Json(states))
}

#[derive(Debug, Deserialize)]
pub struct DistrictQuery {
    pub state_id: u32,
}

async fn list_districts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DistrictQuery>,
) -> Result<Json<Vec<Region>>, ApiError> {
    match state.directory.districts(query.state_id) {
        Ok(districts) => Ok(Json(districts)),
        Err(e) => {
            warn!("District lookup failed: {}", e);
            Err(e.into())
        }
    }
}

async fn location_data(
    State(state): State<Arc<AppState>>,
    Path(district_id): Path<u32>,
) -> Result<Json<LocationData>, ApiError> {
    match state.directory.location_data(district_id) {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            warn!("Location data lookup failed: {}", e);
            Err(e.into())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculateGeometryRequest {
    pub carriageway_width: f64,
    #[serde(default)]
    pub girder_spacing: Option<f64>,
    /// Accepted as a plain number so fractional counts get a field error
    /// rather than a body rejection.
    #[serde(default)]
    pub num_girders: Option<f64>,
    #[serde(default)]
    pub deck_overhang: Option<f64>,
    pub changed_field: GeometryField,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GeometryData {
    pub girder_spacing: f64,
    pub num_girders: u32,
    pub deck_overhang: f64,
    pub overall_width: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CalculateGeometryResponse {
    pub success: bool,
    pub data: GeometryData,
}

async fn calculate_geometry(
    payload: Result<Json<CalculateGeometryRequest>, JsonRejection>,
) -> Result<Json<CalculateGeometryResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!("Malformed geometry request: {}", rejection.body_text());
        ApiError::field("non_field_errors", rejection.body_text())
    })?;
    let num_girders = req.num_girders.map(girder_count_from_f64).transpose()?;
    let input = GeometryInput::new(req.girder_spacing, num_girders, req.deck_overhang);

    let solved = match solve(req.carriageway_width, input, req.changed_field) {
        Ok(solved) => solved,
        Err(e) => {
            info!("Geometry rejected ({}): {}", req.changed_field.key(), e);
            return Err(e.into());
        }
    };

    Ok(Json(CalculateGeometryResponse {
        success: true,
        data: GeometryData {
            girder_spacing: solved.girder_spacing,
            num_girders: solved.num_girders,
            deck_overhang: solved.deck_overhang,
            overall_width: overall_width(req.carriageway_width),
        },
    }))
}
