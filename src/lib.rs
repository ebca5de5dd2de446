pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::trail::TrailBuffer;
pub use simulation::spawn::{spawn_body, Gesture};
pub use simulation::view::{BodyView, TrailPoint, Viewport};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewportConfig};

pub use visualization::viewer::run_viewer;
