//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod restaurant;
pub mod filter_query;
pub mod filter_result;
pub mod geo;
pub mod geolocation;
pub mod map_view;
pub mod proximity;
