pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod trail;
pub mod spawn;
pub mod view;
pub mod scenario;
