//! Transit event search engine: longitude crossings and stations.
//!
//! This crate provides:
//! - Single crossing search (next/previous) for an object's ecliptic
//!   longitude reaching a target value — sign ingresses, exact aspect
//!   longitudes
//! - Range enumeration of all crossings, robust under retrograde loops
//!   (a fixed target can be crossed one or three times per synodic cycle)
//! - Station search (retrograde/direct stations) over the same machinery
//!   applied to the speed channel
//!
//! All searches run against an injected [`gochar_core::Ephemeris`]
//! oracle, synchronously and without shared state, so they can be driven
//! by real ephemeris back-ends or by deterministic synthetic oracles in
//! tests. Negative outcomes ("nothing within the horizon") are `None` or
//! empty vectors, never errors.

pub mod angle;
pub(crate) mod bracket;
pub mod crossing;
pub mod crossing_types;
pub mod error;
pub(crate) mod refine;
pub mod station;
pub mod station_types;

pub use angle::{normalize_angle, wrap_longitude};
pub use crossing::{next_crossing, prev_crossing, search_crossings};
pub use crossing_types::{Crossing, CrossingConfig, SearchDirection};
pub use error::SearchError;
pub use station::{next_station, prev_station, search_stations};
pub use station_types::{Station, StationConfig, StationType};
