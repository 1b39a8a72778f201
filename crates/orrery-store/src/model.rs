//! The planet record as stored in the `planets` table.

use serde::{Deserialize, Serialize};

/// One row of the `planets` table.
///
/// Serialized exactly as stored; absent values become JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    /// Mean radius in km.
    pub radius: Option<f64>,
    /// Mean distance from the Sun in millions of km.
    pub distance_from_sun: Option<f64>,
    /// Length of a solar day in hours.
    pub length_of_day: Option<f64>,
    /// Orbital period in Earth days.
    pub length_of_year: Option<f64>,
    pub fun_facts: Option<String>,
}
