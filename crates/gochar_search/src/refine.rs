//! Safeguarded hybrid Newton-Raphson / bisection root refinement.
//!
//! Converges inside a [`Bracket`] on a function supplied as
//! `f(t) -> (value, slope)`. Newton steps are taken while the slope is
//! usable and are clamped both in length and into the current bracket;
//! otherwise the step degrades to plain bisection. Whichever branch
//! fired, the bracket is tightened every iteration, so it never expands
//! and the returned time always lies within the original interval.

use tracing::warn;

use crate::bracket::Bracket;
use crate::error::SearchError;

/// Minimum usable slope for a Newton step. Below this the function is
/// too flat (near-stationary body) and Newton risks blowing up.
const MIN_SLOPE: f64 = 0.01;

/// Newton step length clamp in days. Prevents pathological
/// extrapolation for very fast or very slow movers and for slopes
/// polluted by wraparound artifacts.
const MAX_NEWTON_STEP_DAYS: f64 = 15.0;

/// Refinement outcome.
///
/// `converged == false` means the iteration budget ran out; `t` is then
/// the best estimate seen and `residual` its function value, left for
/// the caller to judge. Exhaustion is deliberately not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Refined {
    pub t: f64,
    pub residual: f64,
    pub converged: bool,
}

/// Refine the root inside `bracket` until `|value| < tolerance` or
/// `max_iterations` is spent.
pub(crate) fn refine_root<F>(
    f: &F,
    bracket: Bracket,
    tolerance: f64,
    max_iterations: u32,
) -> Result<Refined, SearchError>
where
    F: Fn(f64) -> Result<(f64, f64), SearchError>,
{
    let Bracket {
        mut t_lo,
        mut f_lo,
        mut t_hi,
        ..
    } = bracket;

    let mut t = 0.5 * (t_lo + t_hi);
    let mut best_t = t;
    let mut best_val = f64::INFINITY;

    for _ in 0..max_iterations {
        let (val, slope) = f(t)?;

        if val.abs() < best_val.abs() {
            best_t = t;
            best_val = val;
        }
        if val.abs() < tolerance {
            return Ok(Refined {
                t,
                residual: val,
                converged: true,
            });
        }

        let t_next = if slope.abs() > MIN_SLOPE {
            let dt = (-val / slope).clamp(-MAX_NEWTON_STEP_DAYS, MAX_NEWTON_STEP_DAYS);
            (t + dt).clamp(t_lo, t_hi)
        } else {
            0.5 * (t_lo + t_hi)
        };

        // Tighten: the old estimate replaces whichever endpoint shares
        // its sign, keeping the bracket non-expanding even when the
        // Newton step misbehaves.
        if val * f_lo > 0.0 {
            t_lo = t;
            f_lo = val;
        } else {
            t_hi = t;
        }

        t = t_next;
    }

    warn!(
        t = best_t,
        residual = best_val,
        "refinement exhausted iterations, returning best estimate"
    );
    Ok(Refined {
        t: best_t,
        residual: best_val,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket(t_lo: f64, f_lo: f64, t_hi: f64, f_hi: f64) -> Bracket {
        Bracket { t_lo, f_lo, t_hi, f_hi }
    }

    #[test]
    fn newton_converges_on_linear() {
        let f = |t: f64| Ok((t - 3.0, 1.0));
        let r = refine_root(&f, bracket(0.0, -3.0, 10.0, 7.0), 1e-9, 50).unwrap();
        assert!(r.converged);
        assert!((r.t - 3.0).abs() < 1e-9, "got {}", r.t);
    }

    #[test]
    fn converges_on_sine() {
        let f = |t: f64| Ok((t.sin(), t.cos()));
        let r = refine_root(&f, bracket(2.0, 2.0f64.sin(), 4.0, 4.0f64.sin()), 1e-10, 50).unwrap();
        assert!(r.converged);
        assert!((r.t - std::f64::consts::PI).abs() < 1e-8, "got {}", r.t);
    }

    #[test]
    fn flat_slope_falls_back_to_bisection() {
        // Slope far below the Newton threshold; bisection must carry it.
        let f = |t: f64| Ok(((t - 5.0) * 1e-3, 1e-3));
        let r = refine_root(&f, bracket(0.0, -5e-3, 10.0, 5e-3), 1e-9, 50).unwrap();
        assert!(r.converged);
        assert!((r.t - 5.0).abs() < 1e-4, "got {}", r.t);
    }

    #[test]
    fn result_stays_inside_bracket() {
        // A hostile slope that would fling Newton far outside.
        let f = |t: f64| Ok((t - 3.0, 0.011));
        let r = refine_root(&f, bracket(2.0, -1.0, 4.0, 1.0), 1e-9, 50).unwrap();
        assert!(r.t >= 2.0 && r.t <= 4.0, "got {}", r.t);
        assert!((r.t - 3.0).abs() < 1e-6);
    }

    #[test]
    fn exhaustion_returns_best_estimate() {
        // Unreachable tolerance: must come back non-converged with the
        // smallest residual seen, never an error.
        let f = |t: f64| Ok((t - 3.0 + 0.5, 1.0));
        let r = refine_root(&f, bracket(0.0, -2.5, 5.0, 2.5), 0.0, 5).unwrap();
        assert!(!r.converged);
        assert!(r.t >= 0.0 && r.t <= 5.0);
        assert!(r.residual.is_finite());
    }

    #[test]
    fn oracle_errors_propagate() {
        let f = |_: f64| -> Result<(f64, f64), SearchError> {
            Err(SearchError::InvalidConfig("boom"))
        };
        let r = refine_root(&f, bracket(0.0, -1.0, 1.0, 1.0), 1e-9, 50);
        assert!(r.is_err());
    }
}
