//! Filter state transitions.
//!
//! The page never edits its query string directly. Each user action is an
//! [`FilterIntent`] and [`next_params`] derives the next shareable parameter
//! set from the current one. This is plain data in, data out, so the rules
//! below hold no matter which front end dispatches the intents:
//!
//! - toggling the active sort column flips its direction; toggling another
//!   column switches to it, ascending
//! - choosing (or clearing) a fuel type always clears the search text
//! - editing the search text never touches the fuel type

use crate::core::filter::{FilterParams, SortColumn, SortOrder};

/// A user action on the vehicle list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    /// Replace the search text; empty removes it
    SetSearch(String),
    /// Replace the fuel type filter; empty removes it
    SetFuelType(String),
    /// Sort by a column, flipping direction if it is already active
    ToggleSort(SortColumn),
    /// Remove the search text
    ClearSearch,
    /// Remove the fuel type filter
    ClearFuelType,
}

/// Computes the parameter set that follows `current` once `intent` is applied.
#[must_use]
pub fn next_params(current: &FilterParams, intent: &FilterIntent) -> FilterParams {
    let mut next = current.clone();
    match intent {
        FilterIntent::SetSearch(text) => next.search = non_empty(text),
        FilterIntent::ClearSearch => next.search = None,
        FilterIntent::SetFuelType(name) => {
            next.fuel_type = non_empty(name);
            next.search = None;
        }
        FilterIntent::ClearFuelType => {
            next.fuel_type = None;
            next.search = None;
        }
        FilterIntent::ToggleSort(column) => {
            let active = SortColumn::parse(current.sort_by.as_deref());
            let order = SortOrder::parse(current.sort_order.as_deref());
            let next_order = if active == *column {
                order.flipped()
            } else {
                SortOrder::Asc
            };
            next.sort_by = Some(column.key().to_string());
            next.sort_order = Some(next_order.as_str().to_string());
        }
    }
    next
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_search(search: &str) -> FilterParams {
        FilterParams {
            search: Some(search.to_string()),
            ..FilterParams::default()
        }
    }

    #[test]
    fn test_toggle_active_column_twice_returns_to_ascending() {
        let neutral = FilterParams::default();
        let once = next_params(&neutral, &FilterIntent::ToggleSort(SortColumn::Id));
        assert_eq!(once.sort_order.as_deref(), Some("desc"));

        let twice = next_params(&once, &FilterIntent::ToggleSort(SortColumn::Id));
        assert_eq!(twice.sort_by.as_deref(), Some("id"));
        assert_eq!(twice.sort_order.as_deref(), Some("asc"));
    }

    #[test]
    fn test_toggle_from_ascending_yields_descending() {
        let current = FilterParams {
            sort_by: Some("brand".to_string()),
            sort_order: Some("asc".to_string()),
            ..FilterParams::default()
        };
        let next = next_params(&current, &FilterIntent::ToggleSort(SortColumn::Brand));
        assert_eq!(next.sort_by.as_deref(), Some("brand"));
        assert_eq!(next.sort_order.as_deref(), Some("desc"));
    }

    #[test]
    fn test_toggle_other_column_resets_to_ascending() {
        let current = FilterParams {
            sort_by: Some("year".to_string()),
            sort_order: Some("desc".to_string()),
            ..FilterParams::default()
        };
        let next = next_params(&current, &FilterIntent::ToggleSort(SortColumn::FuelType));
        assert_eq!(next.sort_by.as_deref(), Some("fuelType"));
        assert_eq!(next.sort_order.as_deref(), Some("asc"));
    }

    #[test]
    fn test_toggle_with_unknown_active_key_treats_it_as_id() {
        let current = FilterParams {
            sort_by: Some("bogus".to_string()),
            ..FilterParams::default()
        };
        let next = next_params(&current, &FilterIntent::ToggleSort(SortColumn::Id));
        assert_eq!(next.sort_by.as_deref(), Some("id"));
        assert_eq!(next.sort_order.as_deref(), Some("desc"));
    }

    #[test]
    fn test_setting_fuel_type_clears_search() {
        let next = next_params(
            &with_search("Toyota"),
            &FilterIntent::SetFuelType("Diesel".to_string()),
        );
        assert_eq!(next.fuel_type.as_deref(), Some("Diesel"));
        assert!(next.search.is_none());

        let cleared = next_params(&with_search("Toyota"), &FilterIntent::ClearFuelType);
        assert!(cleared.search.is_none());
        assert!(cleared.fuel_type.is_none());
    }

    #[test]
    fn test_setting_search_keeps_fuel_type() {
        let current = FilterParams {
            fuel_type: Some("Petrol".to_string()),
            ..FilterParams::default()
        };
        let next = next_params(&current, &FilterIntent::SetSearch("BMW".to_string()));
        assert_eq!(next.search.as_deref(), Some("BMW"));
        assert_eq!(next.fuel_type.as_deref(), Some("Petrol"));
    }

    #[test]
    fn test_empty_search_removes_parameter() {
        let next = next_params(&with_search("Kia"), &FilterIntent::SetSearch(String::new()));
        assert!(next.search.is_none());
        assert_eq!(next, next_params(&with_search("Kia"), &FilterIntent::ClearSearch));
    }

    #[test]
    fn test_sort_survives_filter_changes() {
        let current = FilterParams {
            sort_by: Some("year".to_string()),
            sort_order: Some("desc".to_string()),
            ..FilterParams::default()
        };
        let next = next_params(&current, &FilterIntent::SetFuelType("Electric".to_string()));
        assert_eq!(next.sort_by.as_deref(), Some("year"));
        assert_eq!(next.sort_order.as_deref(), Some("desc"));
    }
}
