//! API surface
//!
//! REST endpoints over the league engine.

pub mod rest;

pub use rest::create_router;
