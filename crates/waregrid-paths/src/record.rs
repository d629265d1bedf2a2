//! The [`RouteRecord`] type — the shape a host application persists.
//!
//! The routing core never reads or writes storage itself; it only produces
//! this summary value (notably the computed `length` and the `algorithm`)
//! for a host that chooses to keep named routes.

use waregrid_core::Point;

use crate::distance::route_length;
use crate::route::Algorithm;

/// A named, computed route as a host would store it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRecord {
    pub name: String,
    pub start: Point,
    pub end: Point,
    pub algorithm: Algorithm,
    /// Geometric route length, rounded to 2 decimal places.
    pub length: f64,
    /// Side length of the (square) floor the route was planned on.
    pub grid_size: i32,
    /// Creation timestamp, assigned by the host's storage layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
}

impl RouteRecord {
    /// Summarize a computed route. The length is derived from the route
    /// itself; `created_at` is left for the host to fill in.
    pub fn from_route(
        name: impl Into<String>,
        algorithm: Algorithm,
        route: &[Point],
        grid_size: i32,
    ) -> Option<Self> {
        let (&start, &end) = (route.first()?, route.last()?);
        Some(Self {
            name: name.into(),
            start,
            end,
            algorithm,
            length: route_length(route),
            grid_size,
            created_at: None,
        })
    }
}
