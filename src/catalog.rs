//! Reading orbital elements out of a comet catalog.
//!
//! The format is a JSON array of records, one per body, in the shape of the
//! NASA near-Earth comet elements feed. That feed quotes its numbers, so each
//! numeric field may be either a JSON number or a string holding one. Fields
//! we don't use are ignored.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::astro::{check_eccentricity, HasMass, OrbitError, OrbitalElements};
use crate::consts::get_semimajor_axis;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unable to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {name}: missing `{field}`")]
    MissingField { name: String, field: &'static str },

    #[error("record {name}: {source}")]
    Orbit {
        name: String,
        #[source]
        source: OrbitError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub object_name: Option<String>,
    /// Eccentricity
    #[serde(default, deserialize_with = "number_or_string")]
    pub e: Option<f64>,
    /// Inclination, degrees
    #[serde(default, deserialize_with = "number_or_string")]
    pub i_deg: Option<f64>,
    /// Argument of perihelion, degrees
    #[serde(default, deserialize_with = "number_or_string")]
    pub w_deg: Option<f64>,
    /// Longitude of the ascending node, degrees
    #[serde(default, deserialize_with = "number_or_string")]
    pub node_deg: Option<f64>,
    /// Perihelion distance, AU
    #[serde(default, deserialize_with = "number_or_string")]
    pub q_au_1: Option<f64>,
    /// Aphelion distance, AU
    #[serde(default, deserialize_with = "number_or_string")]
    pub q_au_2: Option<f64>,
    /// Orbital period, years
    #[serde(default, deserialize_with = "number_or_string")]
    pub p_yr: Option<f64>,
}

/// A body that made it through validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub elements: OrbitalElements,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(x)) => Ok(Some(x)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl CatalogRecord {
    pub fn name(&self) -> &str {
        self.object_name
            .as_deref()
            .or(self.object.as_deref())
            .unwrap_or("<unnamed>")
    }

    fn require(&self, value: Option<f64>, field: &'static str) -> Result<f64, CatalogError> {
        value.ok_or_else(|| CatalogError::MissingField {
            name: self.name().to_owned(),
            field,
        })
    }

    /// Semi-major axis in AU. Preference goes to the mean of the apsides,
    /// then perihelion and eccentricity, then the period through Kepler's
    /// third law.
    pub fn semimajor_axis(&self, mu: f64) -> Result<f64, CatalogError> {
        match (self.q_au_1, self.q_au_2, self.e, self.p_yr) {
            (Some(q), Some(big_q), _, _) => Ok((q + big_q) / 2.0),
            (Some(q), None, Some(ecc), _) if ecc < 1.0 => Ok(q / (1.0 - ecc)),
            (_, _, _, Some(period)) => Ok(get_semimajor_axis(period, mu)),
            _ => Err(CatalogError::MissingField {
                name: self.name().to_owned(),
                field: "q_au_2 or p_yr",
            }),
        }
    }

    pub fn to_elements(&self, primary: impl HasMass) -> Result<OrbitalElements, CatalogError> {
        let ecc = self.require(self.e, "e")?;
        check_eccentricity(ecc).map_err(|source| self.orbit_error(source))?;
        let incl = self.require(self.i_deg, "i_deg")?;
        let argp = self.require(self.w_deg, "w_deg")?;
        let lan = self.require(self.node_deg, "node_deg")?;
        let a = self.semimajor_axis(primary.mu())?;

        OrbitalElements::from_degrees(primary, a, ecc, incl, lan, argp)
            .map_err(|source| self.orbit_error(source))
    }

    fn orbit_error(&self, source: OrbitError) -> CatalogError {
        CatalogError::Orbit {
            name: self.name().to_owned(),
            source,
        }
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Vec<CatalogRecord>, CatalogError> {
    let content = std::fs::read_to_string(filename)?;
    parse_catalog(&content)
}

/// Converts every record it can. Records that can't describe a closed orbit
/// are logged and skipped.
pub fn load_elements(records: &[CatalogRecord], primary: impl HasMass) -> Vec<CatalogEntry> {
    let entries: Vec<CatalogEntry> = records
        .iter()
        .filter_map(|record| match record.to_elements(&primary) {
            Ok(elements) => Some(CatalogEntry {
                name: record.name().to_owned(),
                elements,
            }),
            Err(err) => {
                warn!("skipping catalog record: {}", err);
                None
            }
        })
        .collect();

    info!(
        loaded = entries.len(),
        skipped = records.len() - entries.len(),
        "loaded catalog"
    );
    entries
}
