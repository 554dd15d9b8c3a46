//! Display record entity: the answer for one itinerary.

use serde::Serialize;

/// The resolved, human-readable answer for one itinerary.
///
/// Built once per successful resolution and never mutated afterwards. The `name`
/// always matches the key of the itinerary it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub duration: String,
    pub color: String,
    pub summary: String,
    pub distance: String,
}
