//! Coarse scan for a sign-change bracket around a single root.
//!
//! The scan walks evenly spaced samples of a scalar error function and
//! hands back an interval known to contain exactly one genuine zero
//! crossing. For circular error functions (normalized longitude
//! difference) a sign flip also occurs when the body sweeps past the
//! antipodal point of the target; those candidates are rejected by
//! requiring both endpoints to be well inside the half-circle.

use tracing::{debug, trace};

use crate::error::SearchError;

/// Both bracket endpoints must be under this magnitude for a sign change
/// to count as a genuine crossing rather than the antipodal alias.
/// Only meaningful for angular error functions; planetary speeds never
/// come near it, so the station finder can share the scan unchanged.
const GENUINE_CROSSING_MAX: f64 = 90.0;

/// A sample this close to zero is treated as an exact hit and wrapped in
/// a tight synthetic bracket. Handles bodies so slow that a sign change
/// would take an enormous number of steps to materialize.
const EXACT_HIT_EPS: f64 = 1e-3;

/// An interval containing exactly one genuine root, chronologically
/// ordered, with the function values at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    pub t_lo: f64,
    pub f_lo: f64,
    pub t_hi: f64,
    pub f_hi: f64,
}

/// Sample `f` from `t_start` in steps of `step` (signed; negative scans
/// backward) for at most `max_steps` steps, returning the first genuine
/// bracket or `None` when the horizon is exhausted.
pub(crate) fn scan_for_bracket<F>(
    f: &F,
    t_start: f64,
    step: f64,
    max_steps: usize,
) -> Result<Option<Bracket>, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    let mut t_prev = t_start;
    let mut f_prev = f(t_prev)?;
    if f_prev.abs() < EXACT_HIT_EPS {
        return synthetic_bracket(f, t_prev, step);
    }

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f(t_curr)?;

        if f_curr.abs() < EXACT_HIT_EPS {
            return synthetic_bracket(f, t_curr, step);
        }

        if f_prev * f_curr < 0.0 {
            if f_prev.abs() < GENUINE_CROSSING_MAX && f_curr.abs() < GENUINE_CROSSING_MAX {
                // Chronological order regardless of scan direction
                let bracket = if t_prev < t_curr {
                    Bracket {
                        t_lo: t_prev,
                        f_lo: f_prev,
                        t_hi: t_curr,
                        f_hi: f_curr,
                    }
                } else {
                    Bracket {
                        t_lo: t_curr,
                        f_lo: f_curr,
                        t_hi: t_prev,
                        f_hi: f_prev,
                    }
                };
                debug!(
                    t_lo = bracket.t_lo,
                    f_lo = bracket.f_lo,
                    t_hi = bracket.t_hi,
                    f_hi = bracket.f_hi,
                    "bracket accepted"
                );
                return Ok(Some(bracket));
            }
            trace!(t = t_curr, f_prev, f_curr, "antipodal sign change rejected");
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    debug!(t_start, max_steps, "scan horizon exhausted without bracket");
    Ok(None)
}

/// Tight bracket around a sample that already sits on the root.
fn synthetic_bracket<F>(f: &F, t: f64, step: f64) -> Result<Option<Bracket>, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    let eps = 0.5 * step.abs();
    let t_lo = t - eps;
    let t_hi = t + eps;
    trace!(t, "near-zero sample, synthetic bracket");
    Ok(Some(Bracket {
        t_lo,
        f_lo: f(t_lo)?,
        t_hi,
        f_hi: f(t_hi)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_fn(g: impl Fn(f64) -> f64) -> impl Fn(f64) -> Result<f64, SearchError> {
        move |t| Ok(g(t))
    }

    #[test]
    fn linear_crossing_bracketed() {
        // Root at t = 10.5; samples never land close enough for the
        // exact-hit shortcut.
        let f = ok_fn(|t| t - 10.5);
        let b = scan_for_bracket(&f, 0.0, 1.0, 100)
            .unwrap()
            .expect("should bracket");
        assert!((b.t_lo - 10.0).abs() < 1e-12);
        assert!((b.t_hi - 11.0).abs() < 1e-12);
        assert!(b.f_lo < 0.0 && b.f_hi > 0.0);
    }

    #[test]
    fn exact_hit_returns_synthetic_bracket() {
        let f = ok_fn(|t| t - 10.0);
        let b = scan_for_bracket(&f, 0.0, 1.0, 100)
            .unwrap()
            .expect("should bracket");
        assert!((b.t_lo - 9.5).abs() < 1e-12);
        assert!((b.t_hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn backward_scan_orders_chronologically() {
        let f = ok_fn(|t| t - 10.5);
        let b = scan_for_bracket(&f, 20.0, -1.0, 100)
            .unwrap()
            .expect("should bracket");
        assert!(b.t_lo < b.t_hi);
        assert!((b.t_lo - 10.0).abs() < 1e-12);
        assert!((b.t_hi - 11.0).abs() < 1e-12);
    }

    #[test]
    fn antipodal_flip_rejected() {
        // A wrapped angular error jumping +170 -> -170 flips sign but is
        // no crossing; the genuine one comes later with small values.
        let samples = [170.0, -170.0, -120.0, -60.0, -20.0, 15.0];
        let f = move |t: f64| -> Result<f64, SearchError> { Ok(samples[t as usize]) };
        let b = scan_for_bracket(&f, 0.0, 1.0, 5).unwrap().expect("should bracket");
        assert!((b.t_lo - 4.0).abs() < 1e-12, "got {}", b.t_lo);
        assert!((b.t_hi - 5.0).abs() < 1e-12);
    }

    #[test]
    fn horizon_exhaustion_is_none() {
        let f = ok_fn(|_| 45.0);
        let b = scan_for_bracket(&f, 0.0, 1.0, 50).unwrap();
        assert!(b.is_none());
    }

    #[test]
    fn near_stationary_span_still_shortcuts() {
        // Error pinned just under the shortcut threshold for a long span.
        let f = ok_fn(|_| 5e-4);
        let b = scan_for_bracket(&f, 0.0, 1.0, 100).unwrap();
        assert!(b.is_some());
    }
}
