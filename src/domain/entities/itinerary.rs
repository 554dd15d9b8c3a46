//! Itinerary entity and travel mode mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Travel mode understood by the routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// Returns the provider wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TravelMode {
    fn from(text: &str) -> Self {
        translate_mode(text)
    }
}

/// Maps free text onto a [`TravelMode`].
///
/// The match is exact. Anything that is not `bicycling`, `transit` or `walking`
/// (including the empty string) is driving.
pub fn translate_mode(text: &str) -> TravelMode {
    match text {
        "bicycling" => TravelMode::Bicycling,
        "transit" => TravelMode::Transit,
        "walking" => TravelMode::Walking,
        _ => TravelMode::Driving,
    }
}

/// A point-to-point trip to resolve.
///
/// The itinerary's name is not part of the value: it is the key under which the
/// itinerary is stored in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
}

impl Itinerary {
    /// Creates a new itinerary.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, mode: TravelMode) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode,
        }
    }
}
