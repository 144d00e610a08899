//! Filter and sort resolution for the vehicle list.
//!
//! Query-string parameters arrive as optional strings. [`resolve`] turns them
//! into a [`VehicleFilter`] predicate and an [`Ordering`]; neither step can
//! fail, since unknown or empty input falls back to "no constraint" and to
//! identifier-ascending order.
//!
//! Search matching is an ASCII case-insensitive substring test on brand,
//! license plate and driver name. It is expressed as
//! `LOWER(column) LIKE '%needle%'` so the result does not depend on the
//! store's collation. There is no pagination: every call returns the whole
//! filtered fleet, which is only acceptable because the fleet is small
//! reference data.

use crate::core::fuel::canonical_fuel_name;
use crate::entities::{Vehicle, fuel_type, vehicle};
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{Condition, Order, QueryOrder, prelude::*};
use serde::{Deserialize, Serialize};

/// Escape character used in `LIKE` patterns built from search text.
const LIKE_ESCAPE: char = '!';

/// Raw query-string parameters of the vehicle page.
///
/// Field names follow the wire keys (`search`, `fuelType`, `sortBy`,
/// `sortOrder`). Absent and empty values mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    /// Free-text search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Fuel type display name (e.g. `"Petrol"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Sort column key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl FilterParams {
    /// Search text, with empty treated as absent.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }

    /// Fuel type display name, with empty treated as absent.
    #[must_use]
    pub fn fuel_type_name(&self) -> Option<&str> {
        non_empty(self.fuel_type.as_deref())
    }

    /// Builds parameters from decoded query pairs.
    ///
    /// The first occurrence of a key wins and unknown keys are ignored, so no
    /// query string is ever rejected.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "search" => &mut params.search,
                "fuelType" => &mut params.fuel_type,
                "sortBy" => &mut params.sort_by,
                "sortOrder" => &mut params.sort_order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Serializes the parameters as a shareable query string (without `?`).
    ///
    /// Keys are emitted in a fixed order and empty values are dropped.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        [
            ("search", self.search.as_deref()),
            ("fuelType", self.fuel_type.as_deref()),
            ("sortBy", self.sort_by.as_deref()),
            ("sortOrder", self.sort_order.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            non_empty(value).map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Sortable columns of the vehicle table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    /// Vehicle identifier
    #[default]
    Id,
    /// Manufacturer
    Brand,
    /// Registration plate
    LicensePlate,
    /// Model year
    Year,
    /// Assigned driver
    DriverName,
    /// Name of the related fuel type
    FuelType,
}

impl SortColumn {
    /// All columns in table order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Brand,
        Self::LicensePlate,
        Self::Year,
        Self::DriverName,
        Self::FuelType,
    ];

    /// Parses a `sortBy` value. Unknown or absent keys resolve to [`SortColumn::Id`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("brand") => Self::Brand,
            // "licensePlace" is the key older links were shared with
            Some("licensePlate" | "licensePlace") => Self::LicensePlate,
            Some("year") => Self::Year,
            Some("driverName") => Self::DriverName,
            Some("fuelType") => Self::FuelType,
            _ => Self::Id,
        }
    }

    /// Wire key used in `sortBy`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Brand => "brand",
            Self::LicensePlate => "licensePlate",
            Self::Year => "year",
            Self::DriverName => "driverName",
            Self::FuelType => "fuelType",
        }
    }

    /// Column header text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Brand => "Brand",
            Self::LicensePlate => "License Plate",
            Self::Year => "Year",
            Self::DriverName => "Driver Name",
            Self::FuelType => "Fuel Type",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// Parses a `sortOrder` value; anything but `desc` is ascending.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Wire value used in `sortOrder`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl From<SortOrder> for Order {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Asc => Self::Asc,
            SortOrder::Desc => Self::Desc,
        }
    }
}

/// Predicate over vehicles. No field set means every vehicle matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    /// Substring matched against brand, license plate or driver name
    pub search: Option<String>,
    /// Canonical fuel type name the vehicle must have
    pub fuel_type_name: Option<String>,
}

impl VehicleFilter {
    /// True when the filter imposes no constraint.
    #[must_use]
    pub const fn is_universal(&self) -> bool {
        self.search.is_none() && self.fuel_type_name.is_none()
    }

    /// Builds the `WHERE` condition. Fuel type constraints reference the joined
    /// `fuel_types` table, so the query must include that relation.
    #[must_use]
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(search) = &self.search {
            condition = condition.add(
                Condition::any()
                    .add(contains_ignore_ascii_case(vehicle::Column::Brand, search))
                    .add(contains_ignore_ascii_case(
                        vehicle::Column::LicensePlate,
                        search,
                    ))
                    .add(contains_ignore_ascii_case(
                        vehicle::Column::DriverName,
                        search,
                    )),
            );
        }
        if let Some(name) = &self.fuel_type_name {
            condition = condition.add(fuel_type::Column::Name.eq(name.as_str()));
        }
        condition
    }
}

fn contains_ignore_ascii_case(column: vehicle::Column, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_ascii_lowercase()));
    Expr::expr(Func::lower(Expr::col((Vehicle, column))))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Ordering specification for the vehicle list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordering {
    /// Primary sort column
    pub column: SortColumn,
    /// Direction of the primary sort
    pub order: SortOrder,
}

impl Ordering {
    /// Applies the ordering to a vehicle query.
    ///
    /// [`SortColumn::FuelType`] orders by the joined fuel type's name, not by
    /// `fuel_type_id`. Ties are broken by vehicle id ascending.
    #[must_use]
    pub fn apply<Q: QueryOrder>(&self, query: Q) -> Q {
        let order = Order::from(self.order);
        let query = match self.column {
            SortColumn::Id => return query.order_by(vehicle::Column::Id, order),
            SortColumn::Brand => query.order_by(vehicle::Column::Brand, order),
            SortColumn::LicensePlate => query.order_by(vehicle::Column::LicensePlate, order),
            SortColumn::Year => query.order_by(vehicle::Column::Year, order),
            SortColumn::DriverName => query.order_by(vehicle::Column::DriverName, order),
            SortColumn::FuelType => query.order_by(fuel_type::Column::Name, order),
        };
        query.order_by_asc(vehicle::Column::Id)
    }
}

/// Resolved, user-visible filter state echoed back to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Search text, empty when absent
    pub search: String,
    /// Fuel type display name, empty when absent
    pub fuel_type: String,
    /// Active sort column
    pub sort_by: SortColumn,
    /// Active sort direction
    pub sort_order: SortOrder,
}

impl FilterState {
    /// Reconstructs the state from request parameters.
    #[must_use]
    pub fn from_params(params: &FilterParams) -> Self {
        Self {
            search: params.search_text().unwrap_or_default().to_string(),
            fuel_type: params.fuel_type_name().unwrap_or_default().to_string(),
            sort_by: SortColumn::parse(params.sort_by.as_deref()),
            sort_order: SortOrder::parse(params.sort_order.as_deref()),
        }
    }

    /// Direction indicator for a column header.
    #[must_use]
    pub fn indicator(&self, column: SortColumn) -> SortIndicator {
        if self.sort_by != column {
            SortIndicator::Unsorted
        } else if self.sort_order == SortOrder::Asc {
            SortIndicator::Ascending
        } else {
            SortIndicator::Descending
        }
    }
}

/// Sort state of a single column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    /// Not the active column
    Unsorted,
    /// Active, ascending
    Ascending,
    /// Active, descending
    Descending,
}

impl SortIndicator {
    /// Glyph rendered next to the header label.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Unsorted => "↕️",
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Translates request parameters into a predicate and an ordering.
///
/// Empty and absent `search`/`fuelType` impose no constraint. A `fuelType` of
/// `"Petrol"` matches the canonical name `"Gasoline"`; other names are used
/// verbatim.
#[must_use]
pub fn resolve(params: &FilterParams) -> (VehicleFilter, Ordering) {
    let filter = VehicleFilter {
        search: params.search_text().map(str::to_string),
        fuel_type_name: params
            .fuel_type_name()
            .map(|name| canonical_fuel_name(name).to_string()),
    };
    let ordering = Ordering {
        column: SortColumn::parse(params.sort_by.as_deref()),
        order: SortOrder::parse(params.sort_order.as_deref()),
    };
    (filter, ordering)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryFilter, QueryTrait};

    fn params(search: &str, fuel_type: &str, sort_by: &str, sort_order: &str) -> FilterParams {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        FilterParams {
            search: opt(search),
            fuel_type: opt(fuel_type),
            sort_by: opt(sort_by),
            sort_order: opt(sort_order),
        }
    }

    #[test]
    fn test_empty_and_absent_are_universal() {
        let (absent, _) = resolve(&FilterParams::default());
        assert!(absent.is_universal());

        let empty = FilterParams {
            search: Some(String::new()),
            fuel_type: Some(String::new()),
            ..FilterParams::default()
        };
        let (filter, _) = resolve(&empty);
        assert!(filter.is_universal());
        assert_eq!(filter, absent);
    }

    #[test]
    fn test_from_pairs_keeps_first_occurrence() {
        let parsed = FilterParams::from_pairs([
            ("sortBy", "year"),
            ("utm_source", "mail"),
            ("sortBy", "brand"),
            ("search", ""),
            ("search", "Toy"),
        ]);
        assert_eq!(parsed.sort_by.as_deref(), Some("year"));
        assert_eq!(parsed.search.as_deref(), Some(""));
        assert_eq!(parsed.search_text(), None);
        assert!(parsed.fuel_type.is_none());
        assert!(parsed.sort_order.is_none());

        let empty: [(&str, &str); 0] = [];
        assert_eq!(FilterParams::from_pairs(empty), FilterParams::default());
    }

    #[test]
    fn test_petrol_resolves_to_gasoline() {
        let (filter, _) = resolve(&params("", "Petrol", "", ""));
        assert_eq!(filter.fuel_type_name.as_deref(), Some("Gasoline"));

        let (filter, _) = resolve(&params("", "Diesel", "", ""));
        assert_eq!(filter.fuel_type_name.as_deref(), Some("Diesel"));
    }

    #[test]
    fn test_search_and_fuel_type_combine() {
        let (filter, _) = resolve(&params("Toy", "Diesel", "", ""));
        assert_eq!(filter.search.as_deref(), Some("Toy"));
        assert_eq!(filter.fuel_type_name.as_deref(), Some("Diesel"));
        assert!(!filter.is_universal());
    }

    #[test]
    fn test_default_ordering_is_id_ascending() {
        let (_, ordering) = resolve(&FilterParams::default());
        assert_eq!(ordering, Ordering::default());
        assert_eq!(ordering.column, SortColumn::Id);
        assert_eq!(ordering.order, SortOrder::Asc);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_id() {
        let (_, bogus) = resolve(&params("", "", "bogus", ""));
        let (_, absent) = resolve(&FilterParams::default());
        assert_eq!(bogus, absent);

        let (_, ordering) = resolve(&params("", "", "year", "sideways"));
        assert_eq!(ordering.column, SortColumn::Year);
        assert_eq!(ordering.order, SortOrder::Asc);
    }

    #[test]
    fn test_legacy_license_plate_key() {
        assert_eq!(
            SortColumn::parse(Some("licensePlace")),
            SortColumn::LicensePlate
        );
        assert_eq!(SortColumn::LicensePlate.key(), "licensePlate");
    }

    #[test]
    fn test_every_column_key_parses_back() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::parse(Some(column.key())), column);
        }
    }

    #[test]
    fn test_fuel_type_sort_uses_joined_name() {
        let (_, ordering) = resolve(&params("", "", "fuelType", "desc"));
        let sql = ordering
            .apply(Vehicle::find().find_also_related(crate::entities::FuelType))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r#"ORDER BY "fuel_types"."name" DESC"#), "{sql}");
        assert!(!sql.contains(r#"ORDER BY "vehicles"."fuel_type_id""#), "{sql}");
    }

    #[test]
    fn test_search_condition_escapes_wildcards() {
        let (filter, _) = resolve(&params("50%_off", "", "", ""));
        let sql = Vehicle::find()
            .filter(filter.condition())
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("50!%!_off"), "{sql}");
        assert!(sql.contains("LOWER"), "{sql}");
    }

    #[test]
    fn test_query_string_drops_empty_values() {
        let p = FilterParams {
            search: Some("John Smith".to_string()),
            fuel_type: Some(String::new()),
            sort_by: Some("brand".to_string()),
            sort_order: None,
        };
        assert_eq!(p.to_query_string(), "search=John%20Smith&sortBy=brand");
        assert_eq!(FilterParams::default().to_query_string(), "");
    }

    #[test]
    fn test_indicator() {
        let state = FilterState::from_params(&params("", "", "brand", "desc"));
        assert_eq!(state.indicator(SortColumn::Brand), SortIndicator::Descending);
        assert_eq!(state.indicator(SortColumn::Id), SortIndicator::Unsorted);

        let state = FilterState::from_params(&FilterParams::default());
        assert_eq!(state.indicator(SortColumn::Id), SortIndicator::Ascending);
        assert_eq!(SortIndicator::Ascending.symbol(), "↑");
    }
}
