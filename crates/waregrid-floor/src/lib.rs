//! **waregrid-floor** — Floor-plan generation utilities.
//!
//! Builds the occupancy grids that `waregrid-paths` routes over: random
//! rack scatter (with or without a solvability guarantee) and the
//! endpoint-clearing convention callers apply before route queries.

pub mod layout;

pub use layout::FloorGen;
