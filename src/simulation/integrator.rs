//! Fixed-step time integrator for the n-body system
//!
//! Semi-implicit (symplectic) Euler driven by `AccelSet` and `Parameters`.
//! One call advances the system by exactly one step `dt`; there is no
//! sub-stepping and no step-size control.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance the system by one step using semi-implicit Euler
///
/// The update order is the defining property of the scheme and must not
/// be rearranged:
/// 1. drift positions with the velocity carried over from the last step,
/// 2. recompute accelerations from the *new* positions,
/// 3. kick velocities with the fresh accelerations.
///
/// Drifting before kicking keeps the map symplectic, which bounds the
/// long-term energy error of orbital motion; the explicit-Euler order
/// (kick from stale accelerations, then drift) spirals outward instead.
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        // no bodies, return
        return;
    }

    let dt = params.dt;

    // Drift: x_n+1 = x_n + dt * v_n
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Accelerations at the new positions. Scratch buffer, never carried
    // across steps, so a stale acceleration can never leak into a kick.
    let mut a = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a);

    // Kick: v_n+1 = v_n + dt * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        b.v += dt * *a;
    }

    // Advance time by one full step
    sys.t += dt;
}
