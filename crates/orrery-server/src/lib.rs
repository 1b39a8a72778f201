//! Planet metadata HTTP service.
//!
//! One lookup route, `GET`/`HEAD /planets/{name}`, backed by a [`PlanetRepository`],
//! plus a health check. Every response allows cross-origin reads so the
//! browser visualization can call the service directly.
//!
//! [`PlanetRepository`]: orrery_store::PlanetRepository

mod routes;
pub mod server;

pub use routes::{Route, route};
pub use server::{MetadataServer, ServerError};
