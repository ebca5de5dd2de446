//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt` in simulated years,
//! - gravitational constant `G` and softening `eps2`,
//! - spawn mass and gesture velocity divisor for the spawner

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed step size, simulated years per tick
    pub G: f64, // gravitational constant (39.5 in AU/yr/solar-mass units)
    pub eps2: f64, // softening - prevent singular forces at very small separations
    pub spawn_mass: f64, // fixed mass for gesture-spawned bodies
    pub velocity_divisor: f64, // gesture pixels -> simulation velocity units
}

impl Parameters {
    /// Trail capacity: the number of ticks covering one simulated year.
    pub fn trail_capacity(&self) -> usize {
        (1.0 / self.dt).round().max(1.0) as usize
    }
}
