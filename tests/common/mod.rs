#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use traffic_board::application::services::{ItineraryService, QueryEngine};
use traffic_board::domain::entities::{Distance, Itinerary, Leg, Route, Step, TravelMode};
use traffic_board::domain::providers::{ProviderError, RouteClient, RouteProvider};
use traffic_board::infrastructure::cache::{CacheService, MemoryCache};
use traffic_board::infrastructure::persistence::MemoryItineraryRepository;
use traffic_board::state::AppState;

/// Canned answer for one destination.
#[derive(Clone)]
pub enum StubAnswer {
    Route { summary: String, minutes: u64, distance: String },
    NoRoute,
    Fail,
}

/// Provider answering from a destination → answer table.
///
/// Destinations without an entry get [`StubAnswer::NoRoute`].
#[derive(Clone, Default)]
pub struct StubProvider {
    answers: Arc<HashMap<String, StubAnswer>>,
    calls: Arc<AtomicUsize>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(self, destination: &str, summary: &str, minutes: u64, distance: &str) -> Self {
        self.with_answer(
            destination,
            StubAnswer::Route {
                summary: summary.to_string(),
                minutes,
                distance: distance.to_string(),
            },
        )
    }

    pub fn with_failure(self, destination: &str) -> Self {
        self.with_answer(destination, StubAnswer::Fail)
    }

    fn with_answer(self, destination: &str, answer: StubAnswer) -> Self {
        let mut answers = (*self.answers).clone();
        answers.insert(destination.to_string(), answer);
        Self {
            answers: Arc::new(answers),
            calls: self.calls,
        }
    }

    /// Number of `directions` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RouteProvider for StubProvider {
    fn client(&self, credential: &str) -> Result<Box<dyn RouteClient>, ProviderError> {
        if credential.is_empty() {
            return Err(ProviderError::Unavailable("missing API key".to_string()));
        }
        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl RouteClient for StubProvider {
    async fn directions(
        &self,
        _origin: &str,
        destination: &str,
        _mode: TravelMode,
    ) -> Result<Vec<Route>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.answers.get(destination).cloned().unwrap_or(StubAnswer::NoRoute) {
            StubAnswer::Route {
                summary,
                minutes,
                distance,
            } => Ok(vec![route(&summary, minutes, &distance)]),
            StubAnswer::NoRoute => Ok(vec![]),
            StubAnswer::Fail => Err(ProviderError::RouteQueryFailed("stub failure".to_string())),
        }
    }
}

pub fn route(summary: &str, minutes: u64, distance: &str) -> Route {
    Route {
        summary: summary.to_string(),
        legs: vec![Leg {
            duration: Duration::from_secs(minutes * 60),
            distance: Distance {
                meters: 0,
                human_readable: distance.to_string(),
            },
            steps: vec![Step::default()],
        }],
    }
}

pub fn itineraries(entries: &[(&str, &str, &str, TravelMode)]) -> HashMap<String, Itinerary> {
    entries
        .iter()
        .map(|(name, origin, destination, mode)| {
            (
                name.to_string(),
                Itinerary::new(*origin, *destination, *mode),
            )
        })
        .collect()
}

pub fn memory_cache() -> Arc<dyn CacheService> {
    Arc::new(MemoryCache::new(5, Duration::from_secs(600)))
}

pub fn create_test_state(
    provider: StubProvider,
    itineraries: HashMap<String, Itinerary>,
    api_key: &str,
) -> AppState {
    let engine = QueryEngine::new(Arc::new(provider), memory_cache());
    let repository = Arc::new(MemoryItineraryRepository::with_itineraries(itineraries));

    AppState::new(
        Arc::new(engine),
        Arc::new(ItineraryService::new(repository)),
        api_key,
    )
}
