//! Time-grid arithmetic with tolerance-based endpoint handling.
//!
//! A path is evaluated on the closed grid `0, dt, 2*dt, ..., endtime`.
//! Accumulating `time += dt` drifts by a few ulps over hundreds of steps, so
//! both the grid-point count and the termination test compare against the
//! horizon with a relative tolerance rather than strict inequality. Without
//! it, a grid such as `dt = 1/252, endtime = 1` would gain or drop its final
//! point depending on rounding direction.

/// Relative tolerance for horizon comparisons.
///
/// Generous against accumulated round-off over realistic grid lengths while
/// far below any meaningful fraction of a time step.
pub const GRID_RTOL: f64 = 1e-8;

fn tolerance(scale: f64) -> f64 {
    GRID_RTOL * scale.abs().max(1.0)
}

/// Whether elapsed `time` has reached (or passed) the horizon.
pub fn reached_horizon(time: f64, endtime: f64) -> bool {
    time > endtime || (endtime - time).abs() <= tolerance(endtime)
}

/// Number of grid points in `[0, endtime]` stepped by `timestep`.
///
/// Equals `1 + floor(endtime / timestep)` with the ratio nudged by the grid
/// tolerance so an integral grid is never truncated by round-off.
///
/// Requires `timestep > 0`; generator construction enforces this before any
/// grid arithmetic runs.
pub fn grid_points(timestep: f64, endtime: f64) -> usize {
    debug_assert!(timestep > 0.0, "timestep must be positive: got {timestep}");
    let ratio = endtime / timestep;
    1 + (ratio + tolerance(ratio)).floor() as usize
}

/// Number of post-initial transitions on the grid (grid points minus one).
pub fn transition_steps(timestep: f64, endtime: f64) -> usize {
    grid_points(timestep, endtime) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_points_counting_law() {
        assert_eq!(grid_points(1.0, 30.0), 31);
        assert_eq!(grid_points(0.5, 30.0), 61);
        assert_eq!(grid_points(1.0 / 252.0, 1.0), 253);
    }

    #[test]
    fn test_grid_points_degenerate_horizon() {
        assert_eq!(grid_points(1.0, 0.0), 1);
    }

    #[test]
    fn test_grid_points_non_multiple_horizon_truncates() {
        // 0.7 / 0.3 = 2.33..; the last full grid point is 0.6.
        assert_eq!(grid_points(0.3, 0.7), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "timestep must be positive")]
    fn test_grid_points_rejects_zero_timestep() {
        let _ = grid_points(0.0, 1.0);
    }

    #[test]
    fn test_reached_horizon_tolerates_accumulated_drift() {
        let dt = 1.0 / 252.0;
        let mut time = 0.0;
        for _ in 0..252 {
            time += dt;
        }
        // time is within a few ulps of 1.0 but not exactly equal
        assert!(reached_horizon(time, 1.0));
    }

    #[test]
    fn test_reached_horizon_strictly_before() {
        assert!(!reached_horizon(29.0, 30.0));
        assert!(reached_horizon(30.0, 30.0));
        assert!(reached_horizon(30.5, 30.0));
    }

    #[test]
    fn test_transition_steps() {
        assert_eq!(transition_steps(1.0, 30.0), 30);
        assert_eq!(transition_steps(0.5, 30.0), 60);
        assert_eq!(transition_steps(1.0, 0.0), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn integral_grids_count_exactly(steps in 1usize..2000, denom in 1u32..366) {
                // endtime built as an exact multiple of dt must never lose
                // its final point to rounding.
                let dt = 1.0 / f64::from(denom);
                let endtime = steps as f64 * dt;
                prop_assert_eq!(grid_points(dt, endtime), steps + 1);
            }
        }
    }
}
