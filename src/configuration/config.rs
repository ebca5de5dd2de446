//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ViewportConfig`]   – screen mapping (pixels per unit, marker radius)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 0.00547646          # step size in simulated years (~2 days)
//!   G: 39.5                 # gravitational constant, AU/yr/solar-mass units
//!   eps2: 1.0e-6            # softening epsilon^2
//!   spawn_mass: 1.0055304e-25   # gesture-spawned body mass (~200 000 kg)
//!   velocity_divisor: 35.0  # drag pixels -> velocity units
//!
//! viewport:
//!   scale: 200.0            # pixels per AU
//!   radius: 4.0             # full marker radius in pixels
//!
//! bodies:
//!   - name: "Sun"           # optional display label
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 1.0
//!   - x: [ 1.0, 0.0, 0.0 ]
//!     v: [ 0.0, 6.28, 0.0 ]
//!     m: 3.0e-6
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,   // fixed time step size in simulated years
    pub G: f64,    // gravitational constant
    pub eps2: f64, // softening - prevent singular forces at very small separations
    pub spawn_mass: f64, // fixed mass for gesture-spawned bodies
    pub velocity_divisor: f64, // gesture drag pixels -> simulation velocity
}

/// Screen mapping for the viewer and the spawner
#[derive(Deserialize, Debug, Clone)]
pub struct ViewportConfig {
    pub scale: f64,  // pixels per simulation unit
    pub radius: f64, // full marker radius in pixels
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: Option<String>, // optional display label
    pub x: Vec<f64>, // initial position vector in simulation units
    pub v: Vec<f64>, // initial velocity vector in simulation units per year
    pub m: f64,      // mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub viewport: ViewportConfig, // screen mapping
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state
}
