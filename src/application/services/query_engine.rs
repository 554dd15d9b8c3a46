//! Concurrent, cached fan-out over a batch of itineraries.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::application::services::{ItineraryTranslator, ResolveError};
use crate::domain::entities::{DisplayRecord, Itinerary};
use crate::domain::providers::RouteProvider;
use crate::infrastructure::cache::CacheService;

/// Resolves batches of named itineraries against a routing provider.
///
/// One engine is built per process and shared by every caller; it owns the record
/// cache, so concurrent batches share cache capacity and TTL.
///
/// # Batch Semantics
///
/// - Cache hits are copied straight into the result, with no provider call
/// - Each miss runs in its own task: provider call, translation, cache write, append
/// - Failures of any kind drop that itinerary from the result; the batch never fails
/// - The call returns once every itinerary has been accounted for
/// - Result order is unspecified
pub struct QueryEngine {
    provider: Arc<dyn RouteProvider>,
    cache: Arc<dyn CacheService>,
    translator: Arc<ItineraryTranslator>,
    max_concurrency: Option<usize>,
}

impl QueryEngine {
    /// Creates an engine with the default translator and no concurrency cap
    /// beyond the batch size.
    pub fn new(provider: Arc<dyn RouteProvider>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            provider,
            cache,
            translator: Arc::new(ItineraryTranslator::default()),
            max_concurrency: None,
        }
    }

    /// Replaces the translator (and with it the traffic classifier).
    pub fn with_translator(mut self, translator: ItineraryTranslator) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Caps simultaneous lookups per batch. `None` lets a batch run fully parallel.
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit;
        self
    }

    /// The record cache owned by this engine.
    pub fn cache(&self) -> &Arc<dyn CacheService> {
        &self.cache
    }

    /// Resolves every itinerary in the batch and returns the records that succeeded.
    ///
    /// # Concurrency
    ///
    /// A permit pool sized to the batch (or to the configured cap, whichever is
    /// smaller) bounds in-flight lookups. Every itinerary takes exactly one permit
    /// and gives it back exactly once: inline on a cache hit, or when its worker
    /// task ends on a miss, whatever the outcome. The shared result list is locked
    /// only around each append.
    pub async fn query_all(
        &self,
        itineraries: &HashMap<String, Itinerary>,
        credential: &str,
    ) -> Vec<DisplayRecord> {
        let total = itineraries.len();
        if total == 0 {
            return Vec::new();
        }

        let pool_size = self
            .max_concurrency
            .map_or(total, |limit| limit.clamp(1, total));
        let permits = Arc::new(Semaphore::new(pool_size));
        let results = Arc::new(Mutex::new(Vec::with_capacity(total)));
        let credential: Arc<str> = Arc::from(credential);

        let mut workers = JoinSet::new();
        let mut cache_hits = 0usize;

        for (name, itinerary) in itineraries {
            let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
                error!("Lookup permit pool closed, stopping dispatch");
                break;
            };

            if let Some(record) = self.cache.get(name).await {
                debug!("Cached data for {}", name);
                metrics::counter!("traffic_cache_hits_total").increment(1);
                cache_hits += 1;
                results.lock().await.push(record);
                drop(permit);
                continue;
            }

            debug!("Query for data: {}", name);
            metrics::counter!("traffic_cache_misses_total").increment(1);

            let provider = Arc::clone(&self.provider);
            let cache = Arc::clone(&self.cache);
            let translator = Arc::clone(&self.translator);
            let results = Arc::clone(&results);
            let credential = Arc::clone(&credential);
            let name = name.clone();
            let itinerary = itinerary.clone();

            workers.spawn(async move {
                let _permit = permit;

                let record =
                    resolve(provider.as_ref(), &translator, &name, &itinerary, &credential)
                        .await?;

                cache.put(&name, record.clone()).await;
                results.lock().await.push(record);
                Ok::<(), ResolveError>(())
            });
        }

        let mut dropped = 0usize;
        while let Some(outcome) = workers.join_next().await {
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    dropped += 1;
                    metrics::counter!("traffic_provider_failures_total", "reason" => err.kind())
                        .increment(1);
                    warn!(itinerary = err.name(), reason = err.kind(), "{}", err);
                }
                Err(join_error) => {
                    dropped += 1;
                    metrics::counter!("traffic_provider_failures_total", "reason" => "worker_aborted")
                        .increment(1);
                    error!("Itinerary worker aborted: {}", join_error);
                }
            }
        }

        let records = std::mem::take(&mut *results.lock().await);

        info!(
            total,
            cache_hits,
            resolved = records.len(),
            dropped,
            "Itinerary batch resolved"
        );

        records
    }
}

/// Resolves one itinerary through the provider.
async fn resolve(
    provider: &dyn RouteProvider,
    translator: &ItineraryTranslator,
    name: &str,
    itinerary: &Itinerary,
    credential: &str,
) -> Result<DisplayRecord, ResolveError> {
    let client = provider
        .client(credential)
        .map_err(|e| ResolveError::from_provider(name, e))?;

    let routes = client
        .directions(&itinerary.origin, &itinerary.destination, itinerary.mode)
        .await
        .map_err(|e| ResolveError::from_provider(name, e))?;

    translator.translate(name, itinerary, &routes)
}
