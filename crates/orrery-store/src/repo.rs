//! Read-only planet repository.
//!
//! # Invariants
//! - Lookups bind the name as a parameter; it is never spliced into SQL.
//! - Rows are returned as stored, without validation or transformation.

use crate::db::DbError;
use crate::model::Planet;
use rusqlite::{Connection, OptionalExtension, Row, params};

const FIND_BY_NAME_SQL: &str = "SELECT
    name,
    radius,
    distance_from_sun,
    length_of_day,
    length_of_year,
    fun_facts
FROM planets
WHERE name = ?1
LIMIT 1;";

const LIST_NAMES_SQL: &str = "SELECT name FROM planets
ORDER BY distance_from_sun IS NOT NULL, distance_from_sun ASC, name ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for planet queries.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Lookup interface the metadata service is written against.
pub trait PlanetRepository {
    /// Find one planet by name, matching case-insensitively.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Planet>>;

    /// All stored names, ordered outward from the Sun.
    fn list_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed planet repository owning its connection.
pub struct SqlitePlanetRepository {
    conn: Connection,
}

impl SqlitePlanetRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Gives the connection back, e.g. to run ad-hoc maintenance.
    pub fn into_inner(self) -> Connection {
        self.conn
    }
}

impl PlanetRepository for SqlitePlanetRepository {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Planet>> {
        let mut stmt = self.conn.prepare_cached(FIND_BY_NAME_SQL)?;
        let planet = stmt.query_row(params![name], parse_planet_row).optional()?;
        Ok(planet)
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare_cached(LIST_NAMES_SQL)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}

fn parse_planet_row(row: &Row<'_>) -> rusqlite::Result<Planet> {
    Ok(Planet {
        name: row.get(0)?,
        radius: row.get(1)?,
        distance_from_sun: row.get(2)?,
        length_of_day: row.get(3)?,
        length_of_year: row.get(4)?,
        fun_facts: row.get(5)?,
    })
}
