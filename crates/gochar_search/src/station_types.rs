//! Types for station (direction reversal) search.

use gochar_core::ObjectId;
use gochar_time::UtcTime;

/// Station type: retrograde or direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationType {
    /// Longitude speed crosses from positive to negative (starts retrograde).
    StationRetrograde,
    /// Longitude speed crosses from negative to positive (ends retrograde).
    StationDirect,
}

/// A station event: the moment an object's longitude speed crosses zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Event time as Julian Date (TDB).
    pub jd_tdb: f64,
    /// Event time as calendar date, converted on the way out.
    pub utc: UtcTime,
    /// Which object.
    pub object: ObjectId,
    /// Ecliptic longitude at the station in degrees [0, 360).
    pub longitude_deg: f64,
    /// Whether retrograde or direct station.
    pub station_type: StationType,
    /// Speed actually achieved at the returned time, in degrees per day.
    /// Within tolerance when refinement converged.
    pub residual_speed_deg_per_day: f64,
}

/// Configuration for station searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationConfig {
    /// Coarse scan step size in days.
    pub step_size_days: f64,
    /// Scan horizon in days for a single search.
    pub max_scan_days: f64,
    /// Convergence tolerance on the speed in degrees per day.
    pub tolerance_deg_per_day: f64,
    /// Maximum refinement iterations (default 50).
    pub max_iterations: u32,
    /// Safety cap on results per range enumeration (default 100).
    pub max_results: usize,
    /// Step for the central-difference acceleration estimate in days
    /// (default 0.01), used as the refiner's slope.
    pub numerical_step_days: f64,
}

impl StationConfig {
    /// Config for inner planets (Mercury, Venus, Mars): 1-day step.
    pub fn inner_planet() -> Self {
        Self {
            step_size_days: 1.0,
            max_scan_days: 800.0,
            tolerance_deg_per_day: 1e-8,
            max_iterations: 50,
            max_results: 100,
            numerical_step_days: 0.01,
        }
    }

    /// Config for outer planets (Jupiter and beyond): 2-day step.
    pub fn outer_planet() -> Self {
        Self {
            step_size_days: 2.0,
            max_scan_days: 800.0,
            tolerance_deg_per_day: 1e-8,
            max_iterations: 50,
            max_results: 100,
            numerical_step_days: 0.01,
        }
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if !self.max_scan_days.is_finite() || self.max_scan_days <= 0.0 {
            return Err("max_scan_days must be positive");
        }
        if !self.tolerance_deg_per_day.is_finite() || self.tolerance_deg_per_day <= 0.0 {
            return Err("tolerance_deg_per_day must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if self.max_results == 0 {
            return Err("max_results must be > 0");
        }
        if !self.numerical_step_days.is_finite() || self.numerical_step_days <= 0.0 {
            return Err("numerical_step_days must be positive");
        }
        Ok(())
    }
}
