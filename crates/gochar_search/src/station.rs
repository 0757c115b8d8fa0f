//! Station search engine.
//!
//! Finds when an object's ecliptic longitude velocity crosses zero
//! (station retrograde / station direct). Reuses the crossing
//! bracketer and refiner with the oracle's speed channel as the target
//! function — speed is not circular, so no angle normalization is
//! involved, and planetary speeds sit far below the bracketer's
//! antipodal cutoff. The refiner's slope is the acceleration, estimated
//! by central difference since the oracle does not supply it.

use gochar_core::{Ephemeris, ObjectId};
use gochar_time::UtcTime;

use crate::bracket::scan_for_bracket;
use crate::crossing_types::SearchDirection;
use crate::error::SearchError;
use crate::refine::refine_root;
use crate::station_types::{Station, StationConfig, StationType};

/// Restart offset for range enumeration, matching the crossing engine.
const RESCAN_EPSILON_DAYS: f64 = 0.1;

/// Numerical acceleration via central difference: (v(t+h) - v(t-h)) / (2h).
fn numerical_acceleration<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    t: f64,
    h: f64,
) -> Result<f64, SearchError> {
    let v_plus = oracle.position_and_speed(object, t + h)?.speed_deg_per_day;
    let v_minus = oracle.position_and_speed(object, t - h)?.speed_deg_per_day;
    Ok((v_plus - v_minus) / (2.0 * h))
}

/// Find a single station by coarse scan for a speed sign change, then
/// refine inside the bracket.
fn find_station_event<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    jd_start: f64,
    direction: SearchDirection,
    config: &StationConfig,
) -> Result<Option<Station>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !oracle.contains(object) {
        return Err(SearchError::UnknownObject(object));
    }

    let step = match direction {
        SearchDirection::Forward => config.step_size_days,
        SearchDirection::Backward => -config.step_size_days,
    };
    let max_steps = (config.max_scan_days / config.step_size_days).ceil() as usize;

    let speed_at = |t: f64| -> Result<f64, SearchError> {
        Ok(oracle.position_and_speed(object, t)?.speed_deg_per_day)
    };

    let Some(bracket) = scan_for_bracket(&speed_at, jd_start, step, max_steps)? else {
        return Ok(None);
    };

    let h = config.numerical_step_days;
    let speed_and_accel = |t: f64| -> Result<(f64, f64), SearchError> {
        let v = oracle.position_and_speed(object, t)?.speed_deg_per_day;
        let a = numerical_acceleration(oracle, object, t, h)?;
        Ok((v, a))
    };

    let refined = refine_root(
        &speed_and_accel,
        bracket,
        config.tolerance_deg_per_day,
        config.max_iterations,
    )?;

    // Classify by the bracket's leading sign: positive speed entering the
    // root means the body is about to move backward.
    let station_type = if bracket.f_lo > 0.0 {
        StationType::StationRetrograde
    } else {
        StationType::StationDirect
    };

    let s = oracle.position_and_speed(object, refined.t)?;
    Ok(Some(Station {
        jd_tdb: refined.t,
        utc: UtcTime::from_jd(refined.t),
        object,
        longitude_deg: s.longitude_deg,
        station_type,
        residual_speed_deg_per_day: s.speed_deg_per_day,
    }))
}

/// Find the next station after `start`.
///
/// Returns `Ok(None)` when the object's speed never changes sign within
/// the configured scan horizon (e.g. the Sun or Moon, which never
/// stand still geocentrically).
pub fn next_station<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    start: &UtcTime,
    config: &StationConfig,
) -> Result<Option<Station>, SearchError> {
    find_station_event(oracle, object, start.to_jd(), SearchDirection::Forward, config)
}

/// Find the previous station before `start`.
pub fn prev_station<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    start: &UtcTime,
    config: &StationConfig,
) -> Result<Option<Station>, SearchError> {
    find_station_event(oracle, object, start.to_jd(), SearchDirection::Backward, config)
}

/// Enumerate all stations in `[start, end]`.
///
/// Same cursor-driven strategy as crossing enumeration: strictly
/// chronological, duplicate-free, capped at `max_results`.
pub fn search_stations<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    start: &UtcTime,
    end: &UtcTime,
    config: &StationConfig,
) -> Result<Vec<Station>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !oracle.contains(object) {
        return Err(SearchError::UnknownObject(object));
    }

    let jd_start = start.to_jd();
    let jd_end = end.to_jd();
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }

    let mut events: Vec<Station> = Vec::new();
    let mut cursor = jd_start;

    while events.len() < config.max_results {
        let Some(station) =
            find_station_event(oracle, object, cursor, SearchDirection::Forward, config)?
        else {
            break;
        };

        if station.jd_tdb > jd_end {
            break;
        }
        let advancing = match events.last() {
            None => station.jd_tdb >= jd_start,
            Some(prev) => station.jd_tdb > prev.jd_tdb,
        };
        if !advancing {
            cursor += RESCAN_EPSILON_DAYS;
            continue;
        }

        cursor = station.jd_tdb + RESCAN_EPSILON_DAYS;
        events.push(station);
    }

    Ok(events)
}
