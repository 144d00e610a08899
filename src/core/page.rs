//! Vehicle list page model.
//!
//! Assembles everything the list view renders from one set of request
//! parameters: the rows, the fuel type reference list, the resolved filter
//! echo, column headers with their toggle links, and the active filter badges.
//! Framework-agnostic; the web layer only serializes it.

use crate::{
    core::filter::{FilterParams, FilterState, SortColumn, SortIndicator, resolve},
    core::fuel::{FUEL_FILTER_OPTIONS, FilterOption},
    core::transition::{FilterIntent, next_params},
    core::vehicle::{FuelTypeView, VehicleRow, list_fuel_types, list_vehicles},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::time::Duration;

/// Message shown when no vehicle matches.
pub const EMPTY_MESSAGE: &str = "No cars found matching your search criteria.";

/// A sortable column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    /// Sort key
    pub key: SortColumn,
    /// Header text
    pub label: &'static str,
    /// Current sort state
    pub indicator: SortIndicator,
    /// Glyph for the indicator
    pub symbol: &'static str,
    /// Link that toggles sorting on this column
    pub href: String,
}

/// A removable badge for an applied filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilter {
    /// Badge text
    pub label: String,
    /// Link that removes this filter
    pub clear_href: String,
}

/// Everything the vehicle list view renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePage {
    /// Matching vehicles, fully materialized
    pub vehicles: Vec<VehicleRow>,
    /// All fuel types, ordered by name
    pub fuel_types: Vec<FuelTypeView>,
    /// Resolved filter state
    pub filters: FilterState,
    /// Column headers in table order
    pub columns: Vec<ColumnHeader>,
    /// Fuel type drop-down options
    pub filter_options: &'static [FilterOption],
    /// Badges for the applied search and fuel type filters
    pub active_filters: Vec<ActiveFilter>,
    /// Set when `vehicles` is empty
    pub empty_message: Option<&'static str>,
    /// Quiet period the search box waits before submitting
    pub search_debounce_ms: u64,
}

fn href(base_path: &str, params: &FilterParams) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

/// Builds the page for `params`. Links are rooted at `base_path`.
///
/// # Errors
/// Returns an error if either database read fails.
pub async fn build_vehicle_page(
    db: &DatabaseConnection,
    params: &FilterParams,
    base_path: &str,
    search_debounce: Duration,
) -> Result<VehiclePage> {
    let (filter, ordering) = resolve(params);
    let vehicles = list_vehicles(db, &filter, &ordering).await?;
    let fuel_types = list_fuel_types(db)
        .await?
        .into_iter()
        .map(FuelTypeView::from)
        .collect();

    let filters = FilterState::from_params(params);

    let columns = SortColumn::ALL
        .into_iter()
        .map(|column| {
            let indicator = filters.indicator(column);
            ColumnHeader {
                key: column,
                label: column.label(),
                indicator,
                symbol: indicator.symbol(),
                href: href(base_path, &next_params(params, &FilterIntent::ToggleSort(column))),
            }
        })
        .collect();

    let mut active_filters = Vec::new();
    if !filters.search.is_empty() {
        active_filters.push(ActiveFilter {
            label: format!("Search: {}", filters.search),
            clear_href: href(base_path, &next_params(params, &FilterIntent::ClearSearch)),
        });
    }
    if !filters.fuel_type.is_empty() {
        active_filters.push(ActiveFilter {
            label: format!("Fuel Type: {}", filters.fuel_type),
            clear_href: href(base_path, &next_params(params, &FilterIntent::ClearFuelType)),
        });
    }

    let empty_message = vehicles.is_empty().then_some(EMPTY_MESSAGE);

    Ok(VehiclePage {
        vehicles,
        fuel_types,
        filters,
        columns,
        filter_options: &FUEL_FILTER_OPTIONS,
        active_filters,
        empty_message,
        search_debounce_ms: u64::try_from(search_debounce.as_millis()).unwrap_or(u64::MAX),
    })
}
