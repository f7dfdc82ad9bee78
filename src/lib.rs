//! Travel Maker API: a prototype backend that sketches itineraries from a URL,
//! orders a list of places, and keeps trips in memory.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
