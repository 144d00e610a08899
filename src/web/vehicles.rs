//! Vehicle list endpoint.

use crate::{
    core::filter::FilterParams,
    core::page::{VehiclePage, build_vehicle_page},
    errors::Result,
    web::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};
use tracing::{debug, instrument};

/// Path the vehicle page is served from; toggle and clear links point here.
pub const VEHICLES_PATH: &str = "/app/vehicles";

/// `GET /app/vehicles?search=&fuelType=&sortBy=&sortOrder=`
#[instrument(skip_all)]
pub async fn list_vehicles_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<VehiclePage>> {
    let params = FilterParams::from_pairs(pairs);
    debug!(?params, "vehicle page requested");
    let page = build_vehicle_page(&state.db, &params, VEHICLES_PATH, state.search_debounce).await?;
    Ok(Json(page))
}
