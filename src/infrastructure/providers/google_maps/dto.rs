//! DTOs for decoding Directions API JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! routes in one pass.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::entities::{Distance, Leg, Route, Step};

#[derive(Debug, Deserialize)]
pub(super) struct DirectionsResponseDto {
    pub(super) status: String,
    #[serde(default)]
    pub(super) error_message: Option<String>,
    #[serde(default)]
    pub(super) routes: Vec<RouteDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RouteDto {
    #[serde(default)]
    pub(super) summary: String,
    #[serde(default)]
    pub(super) legs: Vec<LegDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LegDto {
    pub(super) duration: Option<ValueTextDto>,
    pub(super) distance: Option<ValueTextDto>,
    #[serde(default)]
    pub(super) steps: Vec<StepDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StepDto {
    pub(super) duration: Option<ValueTextDto>,
    pub(super) distance: Option<ValueTextDto>,
    #[serde(default)]
    pub(super) html_instructions: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ValueTextDto {
    pub(super) value: u64,
    #[serde(default)]
    pub(super) text: String,
}

impl DirectionsResponseDto {
    /// Maps the response into domain routes.
    ///
    /// `ZERO_RESULTS` and `NOT_FOUND` are the provider's "no route" answers and map
    /// to an empty list. Any other non-`OK` status is an error message.
    pub(super) fn into_domain_routes(self) -> Result<Vec<Route>, String> {
        match self.status.as_str() {
            "OK" => Ok(self.routes.into_iter().map(RouteDto::into_domain).collect()),
            "ZERO_RESULTS" | "NOT_FOUND" => Ok(Vec::new()),
            status => Err(match self.error_message {
                Some(message) if !message.is_empty() => format!("{status}: {message}"),
                _ => status.to_string(),
            }),
        }
    }
}

impl RouteDto {
    fn into_domain(self) -> Route {
        Route {
            summary: self.summary,
            legs: self.legs.into_iter().map(LegDto::into_domain).collect(),
        }
    }
}

impl LegDto {
    fn into_domain(self) -> Leg {
        Leg {
            duration: duration_of(self.duration.as_ref()),
            distance: distance_of(self.distance),
            steps: self.steps.into_iter().map(StepDto::into_domain).collect(),
        }
    }
}

impl StepDto {
    fn into_domain(self) -> Step {
        Step {
            duration: duration_of(self.duration.as_ref()),
            distance: distance_of(self.distance),
            instructions: self.html_instructions,
        }
    }
}

fn duration_of(value: Option<&ValueTextDto>) -> Duration {
    value.map_or(Duration::ZERO, |v| Duration::from_secs(v.value))
}

fn distance_of(value: Option<ValueTextDto>) -> Distance {
    value.map_or_else(Distance::default, |v| Distance {
        meters: v.value,
        human_readable: v.text,
    })
}
