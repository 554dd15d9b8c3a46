//! Mapping from provider routes to display records.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::ResolveError;
use crate::domain::entities::{DisplayRecord, Itinerary, Route, Step};

/// Colour tag assigned to a leg from its step sequence.
pub trait TrafficClassifier: Send + Sync {
    fn classify(&self, steps: &[Step]) -> String;
}

/// Classifier that returns the same colour for every input.
///
/// There is no traffic model yet; the default colour is `"green"`.
#[derive(Debug, Clone)]
pub struct ConstantClassifier {
    color: String,
}

impl ConstantClassifier {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Default for ConstantClassifier {
    fn default() -> Self {
        Self::new("green")
    }
}

impl TrafficClassifier for ConstantClassifier {
    fn classify(&self, _steps: &[Step]) -> String {
        self.color.clone()
    }
}

/// Turns a provider answer for one itinerary into a [`DisplayRecord`].
///
/// Only the first route and its first leg are used.
#[derive(Clone)]
pub struct ItineraryTranslator {
    classifier: Arc<dyn TrafficClassifier>,
}

impl ItineraryTranslator {
    /// Creates a translator using `classifier` for the colour tag.
    pub fn new(classifier: Arc<dyn TrafficClassifier>) -> Self {
        Self { classifier }
    }

    /// Builds the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NoRouteFound`] if there are no routes or the first
    /// route has no legs.
    pub fn translate(
        &self,
        name: &str,
        itinerary: &Itinerary,
        routes: &[Route],
    ) -> Result<DisplayRecord, ResolveError> {
        let (route, leg) = routes
            .first()
            .and_then(|route| route.legs.first().map(|leg| (route, leg)))
            .ok_or_else(|| ResolveError::NoRouteFound {
                name: name.to_string(),
            })?;

        Ok(DisplayRecord {
            name: name.to_string(),
            origin: itinerary.origin.clone(),
            destination: itinerary.destination.clone(),
            mode: itinerary.mode.to_string(),
            duration: humanize_duration(leg.duration),
            color: self.classifier.classify(&leg.steps),
            summary: route.summary.clone(),
            distance: leg.distance.human_readable.clone(),
        })
    }
}

impl Default for ItineraryTranslator {
    fn default() -> Self {
        Self::new(Arc::new(ConstantClassifier::default()))
    }
}

/// Renders a duration as whole hours and minutes, rounding down.
///
/// - 95 minutes → `"1 hours and 35 minutes"`
/// - 45 minutes → `"45 minutes"`
/// - 120 minutes → `"2 hours "`
/// - under a minute → `""`
pub fn humanize_duration(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let mut text = String::new();

    if hours > 0 {
        text.push_str(&format!("{hours} hours "));
        if minutes > 0 {
            text.push_str("and ");
        }
    }

    if minutes > 0 {
        text.push_str(&format!("{minutes} minutes"));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Distance, Leg, TravelMode};

    fn minutes(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    fn route(summary: &str, duration: Duration) -> Route {
        Route {
            summary: summary.to_string(),
            legs: vec![Leg {
                duration,
                distance: Distance {
                    meters: 621_000,
                    human_readable: "621 km".to_string(),
                },
                steps: vec![Step::default()],
            }],
        }
    }

    #[test]
    fn test_humanize_duration() {
        assert_eq!(humanize_duration(minutes(0)), "");
        assert_eq!(humanize_duration(minutes(45)), "45 minutes");
        assert_eq!(humanize_duration(minutes(60)), "1 hours ");
        assert_eq!(humanize_duration(minutes(95)), "1 hours and 35 minutes");
        assert_eq!(humanize_duration(minutes(120)), "2 hours ");
        assert_eq!(humanize_duration(minutes(125)), "2 hours and 5 minutes");
    }

    #[test]
    fn test_humanize_duration_floors_seconds() {
        assert_eq!(humanize_duration(Duration::from_secs(59)), "");
        assert_eq!(humanize_duration(Duration::from_secs(45 * 60 + 59)), "45 minutes");
    }

    #[test]
    fn test_translate_uses_first_route_and_leg() {
        let translator = ItineraryTranslator::default();
        let itinerary = Itinerary::new("Madrid", "Barcelona", TravelMode::Driving);
        let routes = vec![route("A-2", minutes(365)), route("AP-7", minutes(400))];

        let record = translator.translate("Home", &itinerary, &routes).unwrap();

        assert_eq!(
            record,
            DisplayRecord {
                name: "Home".to_string(),
                origin: "Madrid".to_string(),
                destination: "Barcelona".to_string(),
                mode: "driving".to_string(),
                duration: "6 hours and 5 minutes".to_string(),
                color: "green".to_string(),
                summary: "A-2".to_string(),
                distance: "621 km".to_string(),
            }
        );
    }

    #[test]
    fn test_translate_without_routes() {
        let translator = ItineraryTranslator::default();
        let itinerary = Itinerary::new("Madrid", "New York", TravelMode::Walking);

        let result = translator.translate("Far", &itinerary, &[]);

        assert!(matches!(result, Err(ResolveError::NoRouteFound { ref name }) if name == "Far"));
    }

    #[test]
    fn test_translate_without_legs() {
        let translator = ItineraryTranslator::default();
        let itinerary = Itinerary::new("Madrid", "Barcelona", TravelMode::Driving);
        let routes = vec![Route {
            summary: "empty".to_string(),
            legs: vec![],
        }];

        let result = translator.translate("Empty", &itinerary, &routes);

        assert!(matches!(result, Err(ResolveError::NoRouteFound { .. })));
    }

    #[test]
    fn test_custom_classifier_is_used() {
        struct StepCount;
        impl TrafficClassifier for StepCount {
            fn classify(&self, steps: &[Step]) -> String {
                format!("steps-{}", steps.len())
            }
        }

        let translator = ItineraryTranslator::new(Arc::new(StepCount));
        let itinerary = Itinerary::new("Madrid", "Toledo", TravelMode::Bicycling);

        let record = translator
            .translate("Bike", &itinerary, &[route("N-401", minutes(300))])
            .unwrap();

        assert_eq!(record.color, "steps-1");
        assert_eq!(record.mode, "bicycling");
    }

    #[test]
    fn test_constant_classifier_ignores_steps() {
        let classifier = ConstantClassifier::default();

        assert_eq!(classifier.classify(&[]), "green");
        assert_eq!(classifier.classify(&[Step::default(), Step::default()]), "green");
    }
}
