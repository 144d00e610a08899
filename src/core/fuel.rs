//! Fuel type naming.
//!
//! The only difference between the names shown to merchants and the names
//! stored in `fuel_types` is one alias: merchants see `"Petrol"` where the
//! table holds `"Gasoline"`. Every other name passes through unchanged in both
//! directions.

use serde::Serialize;

/// Name shown to merchants for gasoline-powered vehicles.
pub const PETROL_DISPLAY_NAME: &str = "Petrol";
/// Name stored in the `fuel_types` table.
pub const GASOLINE_CANONICAL_NAME: &str = "Gasoline";

/// Maps a display name to the canonical stored name.
#[must_use]
pub fn canonical_fuel_name(display: &str) -> &str {
    if display == PETROL_DISPLAY_NAME {
        GASOLINE_CANONICAL_NAME
    } else {
        display
    }
}

/// Maps a canonical stored name to the name shown to merchants.
#[must_use]
pub fn display_fuel_name(canonical: &str) -> &str {
    if canonical == GASOLINE_CANONICAL_NAME {
        PETROL_DISPLAY_NAME
    } else {
        canonical
    }
}

/// One entry of the fuel type drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Value sent as the `fuelType` parameter; empty means no filter
    pub value: &'static str,
    /// Text shown in the drop-down
    pub label: &'static str,
}

/// Options offered by the fuel type drop-down, in display order.
pub const FUEL_FILTER_OPTIONS: [FilterOption; 4] = [
    FilterOption {
        value: "",
        label: "All fuel types",
    },
    FilterOption {
        value: "Diesel",
        label: "Diesel",
    },
    FilterOption {
        value: PETROL_DISPLAY_NAME,
        label: PETROL_DISPLAY_NAME,
    },
    FilterOption {
        value: "Electric",
        label: "Electric",
    },
];
