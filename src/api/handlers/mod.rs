//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod itineraries;
pub mod travels;

pub use health::health_handler;
pub use itineraries::{
    create_itinerary_handler, delete_itinerary_handler, itinerary_list_handler,
};
pub use travels::travels_handler;
