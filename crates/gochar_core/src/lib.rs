//! Ephemeris oracle contract for the gochar search engine.
//!
//! This crate defines the boundary between the search machinery and
//! whatever supplies planetary positions: the [`Ephemeris`] trait, the
//! [`ObjectId`] identifier it is keyed by, and the [`EclipticSample`]
//! value it returns. The engine never computes body positions itself —
//! it is purely a consumer of this interface, which also makes the
//! search logic testable against deterministic synthetic oracles.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier for a searchable object, in NAIF-style numbering.
///
/// The set of valid identifiers is owned by the oracle implementation
/// (see [`Ephemeris::contains`]); the constants below cover the bodies
/// every real back-end provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub i32);

impl ObjectId {
    pub const SUN: Self = Self(10);
    pub const MERCURY: Self = Self(199);
    pub const VENUS: Self = Self(299);
    pub const EARTH: Self = Self(399);
    pub const MOON: Self = Self(301);
    pub const MARS: Self = Self(499);
    pub const JUPITER: Self = Self(599);
    pub const SATURN: Self = Self(699);
    pub const URANUS: Self = Self(799);
    pub const NEPTUNE: Self = Self(899);
    pub const PLUTO: Self = Self(999);
    /// Mean lunar node, a computed point offered by most back-ends.
    pub const MEAN_NODE: Self = Self(11);

    /// Raw numeric code.
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            10 => write!(f, "Sun"),
            199 => write!(f, "Mercury"),
            299 => write!(f, "Venus"),
            399 => write!(f, "Earth"),
            301 => write!(f, "Moon"),
            499 => write!(f, "Mars"),
            599 => write!(f, "Jupiter"),
            699 => write!(f, "Saturn"),
            799 => write!(f, "Uranus"),
            899 => write!(f, "Neptune"),
            999 => write!(f, "Pluto"),
            11 => write!(f, "MeanNode"),
            code => write!(f, "Object({code})"),
        }
    }
}

/// One oracle sample: geocentric ecliptic longitude and its rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticSample {
    /// Ecliptic longitude in degrees, always in [0, 360).
    pub longitude_deg: f64,
    /// Longitude rate in degrees per day; negative while retrograde.
    pub speed_deg_per_day: f64,
}

impl EclipticSample {
    /// Build a sample, wrapping the longitude into [0, 360).
    pub fn new(longitude_deg: f64, speed_deg_per_day: f64) -> Self {
        Self {
            longitude_deg: longitude_deg.rem_euclid(360.0),
            speed_deg_per_day,
        }
    }

    /// Whether the body is in apparent backward motion at this sample.
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Position/speed provider for searchable objects.
///
/// Implementations must be deterministic and side-effect-free as seen by
/// the search engine: the same `(object, jd_tdb)` query always yields the
/// same sample. The trait deliberately does not require `Sync` — real
/// ephemeris back-ends keep internal fixed-point caches and are not
/// re-entrant, so callers running searches on multiple threads must
/// provision one oracle instance per thread.
pub trait Ephemeris {
    /// Whether `object` exists in the back-end's registry.
    ///
    /// Searches consult this before any position query and fail fast
    /// with an unknown-object error when it returns `false`.
    fn contains(&self, object: ObjectId) -> bool;

    /// Geocentric ecliptic longitude and speed at a JD epoch.
    fn position_and_speed(
        &self,
        object: ObjectId,
        jd_tdb: f64,
    ) -> Result<EclipticSample, OracleError>;
}

/// Errors an ephemeris back-end can report.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    /// Requested epoch is outside the back-end's coverage.
    EpochOutOfRange,
    /// Any other provider failure.
    Backend(String),
}

impl Display for OracleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange => write!(f, "epoch outside ephemeris coverage"),
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
        }
    }
}

impl Error for OracleError {}
