//! Core logic - framework-agnostic filtering, eligibility and seeding.

/// Debounced dispatch of search edits
pub mod debounce;
/// Checkout long-delivery eligibility
pub mod eligibility;
/// Query parameters to predicate and ordering
pub mod filter;
/// Display and canonical fuel type names
pub mod fuel;
/// Vehicle list page model
pub mod page;
/// Seeding of reference and demo data
pub mod seed;
/// Filter state transitions
pub mod transition;
/// Vehicle and fuel type queries
pub mod vehicle;
