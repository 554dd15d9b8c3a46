//! Provider route hierarchy: a route has legs, a leg has steps.

use std::time::Duration;

/// A distance as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distance {
    pub meters: u64,
    /// Provider-formatted text, e.g. `"621 km"`.
    pub human_readable: String,
}

/// Turn-by-turn detail within a leg.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub duration: Duration,
    pub distance: Distance,
    pub instructions: String,
}

/// One journey segment of a route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leg {
    pub duration: Duration,
    pub distance: Distance,
    pub steps: Vec<Step>,
}

/// A candidate route between two points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub summary: String,
    pub legs: Vec<Leg>,
}
