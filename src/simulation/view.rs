//! Screen-space projection and per-frame render views
//!
//! `Viewport` maps simulation positions onto canvas-convention pixels
//! (origin top-left, y down). `BodyView` is the read-only snapshot handed
//! to the renderer each tick: label, current screen position, and the
//! trail with a recency fraction per point. Pure data, no rendering
//! surface required, so the physics can be exercised headlessly.

use crate::simulation::states::{Body, NVec2, NVec3};

/// Fixed rendering parameters mapping simulation space to screen pixels
#[derive(Debug, Clone)]
pub struct Viewport {
    pub center: NVec2, // screen position of the simulation origin, pixels
    pub scale: f64, // pixels per simulation unit
    pub radius: f64, // full marker radius in pixels
}

impl Viewport {
    /// Project a simulation position onto the screen (z is dropped).
    pub fn project(&self, x: &NVec3) -> NVec2 {
        self.center + self.scale * NVec2::new(x.x, x.y)
    }
}

/// One entry of a rendered trail
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub screen: NVec2, // recorded screen position
    pub recency: f64, // i/len, 0 oldest .. approaching 1 newest
}

/// Per-body render snapshot produced once per tick
#[derive(Debug, Clone)]
pub struct BodyView {
    pub label: Option<String>,
    pub screen: NVec2, // current projected position
    pub trail: Vec<TrailPoint>, // oldest first
}

impl BodyView {
    /// Snapshot `body` through `viewport`. The recency fraction increases
    /// monotonically from the oldest trail entry to the newest; the
    /// renderer owns how it maps to opacity and marker size.
    pub fn of(body: &Body, viewport: &Viewport) -> Self {
        let len = body.trail.len();
        let trail = body
            .trail
            .iter()
            .enumerate()
            .map(|(i, p)| TrailPoint {
                screen: *p,
                recency: i as f64 / len as f64,
            })
            .collect();

        Self {
            label: body.name.clone(),
            screen: viewport.project(&body.x),
            trail,
        }
    }
}
