//! Longitude crossing search engine.
//!
//! Finds when an object's ecliptic longitude reaches a target value:
//! sign ingresses (multiples of 30°), exact aspect longitudes, or any
//! arbitrary degree. Uses coarse scan + safeguarded Newton/bisection
//! refinement on the wrapped error function
//! `f(t) = normalize(longitude(t) - target)`, whose slope is the
//! longitude speed the oracle already supplies.
//!
//! Retrograde motion makes the error function non-monotonic, so a fixed
//! target can be crossed one or three times per synodic cycle; the range
//! enumeration rediscovers each crossing by restarting just past the
//! previous one.

use gochar_core::{Ephemeris, ObjectId};
use gochar_time::UtcTime;

use crate::angle::{normalize_angle, wrap_longitude};
use crate::bracket::scan_for_bracket;
use crate::crossing_types::{Crossing, CrossingConfig, SearchDirection};
use crate::error::SearchError;
use crate::refine::refine_root;

/// Restart offset for range enumeration: the cursor resumes this many
/// days past a found crossing so the same root is not rediscovered.
const RESCAN_EPSILON_DAYS: f64 = 0.1;

/// Find a single crossing by coarse scan for a genuine sign change of
/// the wrapped longitude error, then refine inside the bracket.
fn find_crossing_event<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    target_deg: f64,
    jd_start: f64,
    direction: SearchDirection,
    config: &CrossingConfig,
) -> Result<Option<Crossing>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !oracle.contains(object) {
        return Err(SearchError::UnknownObject(object));
    }

    // 0° and 360° must alias to the same crossing.
    let target = wrap_longitude(target_deg);

    let step = match direction {
        SearchDirection::Forward => config.step_size_days,
        SearchDirection::Backward => -config.step_size_days,
    };
    let max_steps = (config.max_scan_days / config.step_size_days).ceil() as usize;

    let error_at = |t: f64| -> Result<f64, SearchError> {
        let s = oracle.position_and_speed(object, t)?;
        Ok(normalize_angle(s.longitude_deg - target))
    };

    let Some(bracket) = scan_for_bracket(&error_at, jd_start, step, max_steps)? else {
        return Ok(None);
    };

    let error_and_slope = |t: f64| -> Result<(f64, f64), SearchError> {
        let s = oracle.position_and_speed(object, t)?;
        Ok((normalize_angle(s.longitude_deg - target), s.speed_deg_per_day))
    };

    let refined = refine_root(
        &error_and_slope,
        bracket,
        config.tolerance_deg,
        config.max_iterations,
    )?;

    // Re-sample at the refined time so the event metadata is exactly the
    // oracle's view of that instant.
    let s = oracle.position_and_speed(object, refined.t)?;
    Ok(Some(Crossing {
        jd_tdb: refined.t,
        utc: UtcTime::from_jd(refined.t),
        object,
        longitude_deg: s.longitude_deg,
        speed_deg_per_day: s.speed_deg_per_day,
        is_retrograde: s.is_retrograde(),
        achieved_error_deg: normalize_angle(s.longitude_deg - target),
    }))
}

/// Find the next crossing of `target_deg` after `start`.
///
/// Returns `Ok(None)` when no crossing exists within the configured
/// scan horizon.
pub fn next_crossing<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    target_deg: f64,
    start: &UtcTime,
    config: &CrossingConfig,
) -> Result<Option<Crossing>, SearchError> {
    find_crossing_event(
        oracle,
        object,
        target_deg,
        start.to_jd(),
        SearchDirection::Forward,
        config,
    )
}

/// Find the previous crossing of `target_deg` before `start`.
pub fn prev_crossing<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    target_deg: f64,
    start: &UtcTime,
    config: &CrossingConfig,
) -> Result<Option<Crossing>, SearchError> {
    find_crossing_event(
        oracle,
        object,
        target_deg,
        start.to_jd(),
        SearchDirection::Backward,
        config,
    )
}

/// Enumerate all crossings of `target_deg` in `[start, end]`.
///
/// Repeats the single search forward from a cursor, restarting just past
/// each found crossing. Stops when a search comes back empty, a result
/// lands past `end`, or `max_results` is reached. Results are strictly
/// chronological and duplicate-free.
pub fn search_crossings<E: Ephemeris>(
    oracle: &E,
    object: ObjectId,
    target_deg: f64,
    start: &UtcTime,
    end: &UtcTime,
    config: &CrossingConfig,
) -> Result<Vec<Crossing>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !oracle.contains(object) {
        return Err(SearchError::UnknownObject(object));
    }

    let jd_start = start.to_jd();
    let jd_end = end.to_jd();
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }

    let mut events: Vec<Crossing> = Vec::new();
    let mut cursor = jd_start;

    while events.len() < config.max_results {
        let Some(crossing) = find_crossing_event(
            oracle,
            object,
            target_deg,
            cursor,
            SearchDirection::Forward,
            config,
        )?
        else {
            break;
        };

        if crossing.jd_tdb > jd_end {
            break;
        }
        // A refined root can land marginally behind the cursor (synthetic
        // brackets straddle it); skip without appending so the result
        // list stays strictly increasing and inside the range.
        let advancing = match events.last() {
            None => crossing.jd_tdb >= jd_start,
            Some(prev) => crossing.jd_tdb > prev.jd_tdb,
        };
        if !advancing {
            cursor += RESCAN_EPSILON_DAYS;
            continue;
        }

        cursor = crossing.jd_tdb + RESCAN_EPSILON_DAYS;
        events.push(crossing);
    }

    Ok(events)
}
