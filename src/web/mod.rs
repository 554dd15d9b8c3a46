//! Server-rendered traffic board.
//!
//! Uses Askama templates for the board page and for the add/remove
//! confirmation pages.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Board route configuration

pub mod handlers;
pub mod routes;
