//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - rendering parameters (`Viewport`)
//! - system state (`System` with bodies at t = 0, empty trails)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! viewer: one `tick()` per frame, `spawn()` on gesture release, and
//! `frame()` for the read-only render snapshot.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::spawn::{spawn_body, Gesture};
use crate::simulation::states::{Body, NVec2, NVec3, System};
use crate::simulation::trail::TrailBuffer;
use crate::simulation::view::{BodyView, Viewport};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the numerical parameters, viewport mapping, current system
/// state, and the set of active force laws (accelerations)
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub viewport: Viewport,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
            spawn_mass: p_cfg.spawn_mass,
            velocity_divisor: p_cfg.velocity_divisor,
        };
        let trail_capacity = parameters.trail_capacity();

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors,
        // each starting with an empty trail
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body {
                name: bc.name.clone(),
                x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                m: bc.m,
                trail: TrailBuffer::new(trail_capacity),
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Viewport (runtime) from ViewportConfig; the center is filled in
        // by the viewer from the actual window size
        let v_cfg = cfg.viewport;
        let viewport = Viewport {
            center: NVec2::zeros(),
            scale: v_cfg.scale,
            radius: v_cfg.radius,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Self {
            parameters,
            viewport,
            system,
            forces,
        }
    }

    /// Advance the simulation by exactly one tick: one integrator step,
    /// then one trail append per body with its freshly projected screen
    /// position. Must run to completion before the next tick starts.
    pub fn tick(&mut self) {
        symplectic_euler(&mut self.system, &self.forces, &self.parameters);

        for body in self.system.bodies.iter_mut() {
            let screen = self.viewport.project(&body.x);
            body.trail.push(screen);
        }
    }

    /// Append a gesture-spawned body to the registry. Returns whether the
    /// gesture was accepted; non-finite input is dropped. Existing bodies
    /// are never touched, so a spawn may interleave between ticks.
    pub fn spawn(&mut self, gesture: &Gesture) -> bool {
        match spawn_body(gesture, &self.viewport, &self.parameters) {
            Some(body) => {
                self.system.bodies.push(body);
                true
            }
            None => false,
        }
    }

    /// Read-only render snapshot of every body, in registry order.
    pub fn frame(&self) -> Vec<BodyView> {
        self.system
            .bodies
            .iter()
            .map(|b| BodyView::of(b, &self.viewport))
            .collect()
    }
}
