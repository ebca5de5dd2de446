//! Core state types for the n-body simulation.
//!
//! Defines the runtime body/system structs:
//! - `Body`   point mass with an optional display name and a trail of
//!            past screen positions
//! - `System` the ordered, append-only collection of bodies plus the
//!            current simulation time `t`
//!
//! Positions and velocities live in simulation units (AU, years, solar
//! masses in the shipped scenario); trails hold screen-space pixels.

use nalgebra::{Vector2, Vector3};

use crate::simulation::trail::TrailBuffer;

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: Option<String>, // display label, None for spawned bodies
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, > 0
    pub trail: TrailBuffer, // past screen positions, oldest first
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // append-only collection of bodies
    pub t: f64, // time
}
