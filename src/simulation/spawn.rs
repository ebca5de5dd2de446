//! Gesture-to-body conversion
//!
//! A press/release pointer gesture in screen pixels becomes a new body:
//! the press point fixes the position, the drag vector fixes the
//! velocity, and the mass is a fixed negligible test mass. Non-finite
//! gesture coordinates are rejected outright, since a single NaN body
//! would poison every other body's acceleration on the next tick.

use log::warn;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, NVec3};
use crate::simulation::trail::TrailBuffer;
use crate::simulation::view::Viewport;

/// A press-then-release pointer interaction in screen pixels
#[derive(Debug, Clone, Copy)]
pub struct Gesture {
    pub press: NVec2,
    pub release: NVec2,
}

impl Gesture {
    pub fn new(press: NVec2, release: NVec2) -> Self {
        Self { press, release }
    }

    /// Both points finite in every component.
    pub fn is_finite(&self) -> bool {
        self.press.iter().chain(self.release.iter()).all(|c| c.is_finite())
    }
}

/// Convert a gesture into a new body, or `None` for non-finite input
///
/// - position = (press - center) / scale, z = 0
/// - velocity = (release - press) / velocity_divisor, z = 0
/// - mass     = the fixed spawn mass
///
/// Any finite coordinates are accepted as-is; there is no bounds check.
pub fn spawn_body(gesture: &Gesture, viewport: &Viewport, params: &Parameters) -> Option<Body> {
    if !gesture.is_finite() {
        warn!("dropping spawn gesture with non-finite coordinates: {gesture:?}");
        return None;
    }

    let p = (gesture.press - viewport.center) / viewport.scale;
    let v = (gesture.release - gesture.press) / params.velocity_divisor;

    Some(Body {
        name: None,
        x: NVec3::new(p.x, p.y, 0.0),
        v: NVec3::new(v.x, v.y, 0.0),
        m: params.spawn_mass,
        trail: TrailBuffer::new(params.trail_capacity()),
    })
}
