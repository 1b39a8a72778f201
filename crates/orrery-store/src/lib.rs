//! Planet metadata storage.
//!
//! Owns the SQLite connection bootstrap, the versioned schema and seed data,
//! and the read-only planet repository the metadata service queries.

pub mod db;
pub mod model;
pub mod repo;

pub use db::{
    DEFAULT_BUSY_TIMEOUT, DbError, DbResult, open_db, open_db_in_memory, open_db_with_timeout,
};
pub use model::Planet;
pub use repo::{PlanetRepository, RepoError, RepoResult, SqlitePlanetRepository};
