//! Types for longitude crossing search.

use gochar_core::ObjectId;
use gochar_time::UtcTime;

/// Search direction relative to the start epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// A longitude crossing event: the moment an object's ecliptic
/// longitude reaches a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Event time as Julian Date (TDB).
    pub jd_tdb: f64,
    /// Event time as calendar date, converted on the way out.
    pub utc: UtcTime,
    /// Which object.
    pub object: ObjectId,
    /// Ecliptic longitude at the event in degrees [0, 360).
    pub longitude_deg: f64,
    /// Longitude speed at the event in degrees per day.
    pub speed_deg_per_day: f64,
    /// Whether the object was in retrograde motion at the event.
    /// Always agrees with the sign of `speed_deg_per_day`.
    pub is_retrograde: bool,
    /// Residual `normalize(longitude - target)` actually achieved.
    /// Within tolerance when refinement converged; larger only if the
    /// iteration budget ran out, letting callers detect degraded results.
    pub achieved_error_deg: f64,
}

/// Configuration for crossing searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingConfig {
    /// Coarse scan step size in days. Must be small enough that the
    /// object cannot move ~90° per step, or a genuine crossing whose
    /// endpoints straddle the antipodal-rejection cutoff may be missed.
    pub step_size_days: f64,
    /// Scan horizon in days for a single search.
    pub max_scan_days: f64,
    /// Convergence tolerance on the longitude error in degrees.
    pub tolerance_deg: f64,
    /// Maximum refinement iterations (default 50).
    pub max_iterations: u32,
    /// Safety cap on results per range enumeration (default 100).
    pub max_results: usize,
}

impl CrossingConfig {
    /// Config for fast movers (the Moon, ~13-15°/day): quarter-day step.
    pub fn fast_mover() -> Self {
        Self {
            step_size_days: 0.25,
            max_scan_days: 800.0,
            tolerance_deg: 1e-6,
            max_iterations: 50,
            max_results: 100,
        }
    }

    /// Config for inner planets (Sun, Mercury, Venus, Mars): 1-day step.
    pub fn inner_planet() -> Self {
        Self {
            step_size_days: 1.0,
            max_scan_days: 800.0,
            tolerance_deg: 1e-6,
            max_iterations: 50,
            max_results: 100,
        }
    }

    /// Config for outer planets (Jupiter and beyond): 2-day step.
    pub fn outer_planet() -> Self {
        Self {
            step_size_days: 2.0,
            max_scan_days: 800.0,
            tolerance_deg: 1e-6,
            max_iterations: 50,
            max_results: 100,
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
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if self.max_results == 0 {
            return Err("max_results must be > 0");
        }
        Ok(())
    }
}
