use gravitoy::simulation::forces::{AccelSet, NewtonianGravity};
use gravitoy::simulation::integrator::symplectic_euler;
use gravitoy::simulation::params::Parameters;
use gravitoy::simulation::scenario::Scenario;
use gravitoy::simulation::spawn::{spawn_body, Gesture};
use gravitoy::simulation::states::{Body, NVec2, NVec3, System};
use gravitoy::simulation::trail::TrailBuffer;
use gravitoy::simulation::view::Viewport;
use gravitoy::configuration::config::ScenarioConfig;

/// Build a simple 2-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body {
        name: None,
        x: [-dist / 2.0, 0.0, 0.0].into(),
        v: [0.0, 0.0, 0.0].into(),
        m: m1,
        trail: TrailBuffer::new(8),
    };
    let b2 = Body {
        name: None,
        x: [dist / 2.0, 0.0, 0.0].into(),
        v: [0.0, 0.0, 0.0].into(),
        m: m2,
        trail: TrailBuffer::new(8),
    };
    System {
        bodies: vec![b1, b2],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        dt: 2.0 / 365.2,
        G: 39.5,
        eps2: 0.0,
        spawn_mass: 1.0055304e-25,
        velocity_divisor: 35.0,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: p.G,
        eps2: p.eps2,
    })
}

/// Viewport with the simulation origin at the screen origin
pub fn test_viewport() -> Viewport {
    Viewport {
        center: NVec2::zeros(),
        scale: 200.0,
        radius: 4.0,
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let a1: NVec3 = acc[0];
    let a2: NVec3 = acc[1];

    // Contributions are opposite and related by the mass ratio, so the
    // net momentum change is zero
    let net = a1 * sys.bodies[0].m + a2 * sys.bodies[1].m;

    assert!(net.norm() < 1e-12, "Net momentum not zero: {:?}", net);
    assert!(a1.dot(&a2) < 0.0, "Accelerations not opposite: {:?} {:?}", a1, a2);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    let a1: NVec3 = acc[0];

    assert!(dx.norm() > 0.0);
    assert!(a1.dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![Default::default(); 2];
    let mut acc_2r = vec![Default::default(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let a_r: NVec3 = acc_r[0];
    let a_2r: NVec3 = acc_2r[0];
    let ratio = a_r.norm() / a_2r.norm();

    assert!((ratio - 4.0).abs() < 1e-3, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let mut p = test_params();
    p.eps2 = 0.1;

    let sys = two_body_system(1e-9, 1.0, 1.0);
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let a: NVec3 = acc[0];
    assert!(a.norm() < 1e9, "Softening failed; acceleration too large");
    assert!(a.norm().is_finite());
}

#[test]
fn gravity_degenerate_registry_yields_zero() {
    let p = test_params();
    let forces = gravity_set(&p);

    // Empty registry: nothing to accumulate, nothing to panic on
    let empty = System {
        bodies: vec![],
        t: 0.0,
    };
    let mut acc: Vec<NVec3> = vec![];
    forces.accumulate_accels(empty.t, &empty, &mut acc);

    // Single body: no self-interaction, acceleration stays zero
    let lonely = System {
        bodies: vec![Body {
            name: None,
            x: [1.0, 2.0, 3.0].into(),
            v: [0.0, 0.0, 0.0].into(),
            m: 5.0,
            trail: TrailBuffer::new(8),
        }],
        t: 0.0,
    };
    let mut acc = vec![NVec3::new(9.0, 9.0, 9.0)];
    forces.accumulate_accels(lonely.t, &lonely, &mut acc);

    assert!(acc[0].norm() == 0.0, "Single body accelerated: {:?}", acc[0]);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn integrator_closes_kepler_orbit() {
    // Light body on a circular orbit around a dominant mass. After one
    // orbital period from Kepler's third law it should be back near its
    // starting point.
    let mut p = test_params();
    p.dt = 0.001;

    let r = 1.0;
    let m_sun = 1.0;
    let m_planet = 3.0e-6;
    let v_circ = (p.G * m_sun / r).sqrt();

    let mut sys = System {
        bodies: vec![
            Body {
                name: None,
                x: [0.0, 0.0, 0.0].into(),
                v: [0.0, 0.0, 0.0].into(),
                m: m_sun,
                trail: TrailBuffer::new(8),
            },
            Body {
                name: None,
                x: [r, 0.0, 0.0].into(),
                v: [0.0, v_circ, 0.0].into(),
                m: m_planet,
                trail: TrailBuffer::new(8),
            },
        ],
        t: 0.0,
    };
    let forces = gravity_set(&p);

    let start = sys.bodies[1].x;
    let period = 2.0 * std::f64::consts::PI * (r * r * r / (p.G * (m_sun + m_planet))).sqrt();
    let steps = (period / p.dt).round() as usize;

    for _ in 0..steps {
        symplectic_euler(&mut sys, &forces, &p);
    }

    let err = (sys.bodies[1].x - start).norm();
    assert!(err < 0.05, "Orbit did not close: error {} AU", err);
}

#[test]
fn integrator_momentum_drift_bounded() {
    let p = test_params();
    let forces = gravity_set(&p);

    let mut sys = System {
        bodies: vec![
            Body {
                name: None,
                x: [0.0, 0.0, 0.0].into(),
                v: [0.0, 0.0, 0.0].into(),
                m: 1.0,
                trail: TrailBuffer::new(8),
            },
            Body {
                name: None,
                x: [1.0, 0.0, 0.0].into(),
                v: [0.0, 6.28, 0.0].into(),
                m: 3.0e-6,
                trail: TrailBuffer::new(8),
            },
            Body {
                name: None,
                x: [-0.5, 1.2, 0.01].into(),
                v: [-4.0, -2.0, 0.1].into(),
                m: 3.2e-7,
                trail: TrailBuffer::new(8),
            },
        ],
        t: 0.0,
    };

    let momentum = |sys: &System| -> NVec3 {
        sys.bodies.iter().map(|b| b.m * b.v).sum()
    };

    let p0 = momentum(&sys);
    for _ in 0..1000 {
        symplectic_euler(&mut sys, &forces, &p);
    }
    let p1 = momentum(&sys);

    let drift = (p1 - p0).norm();
    assert!(drift < 1e-9, "Momentum drifted by {}", drift);
}

#[test]
fn integrator_empty_system_is_noop() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = System {
        bodies: vec![],
        t: 0.0,
    };

    symplectic_euler(&mut sys, &forces, &p);

    assert_eq!(sys.bodies.len(), 0);
    assert_eq!(sys.t, 0.0, "Time advanced with no bodies");
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_fifo_eviction() {
    let mut trail = TrailBuffer::new(5);

    for i in 0..12 {
        trail.push(NVec2::new(i as f64, i as f64));
    }

    assert_eq!(trail.len(), 5);
    let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![7.0, 8.0, 9.0, 10.0, 11.0], "Not the last 5 in order");
}

#[test]
fn trail_capacity_covers_one_year() {
    let p = test_params(); // dt = 2/365.2
    assert_eq!(p.trail_capacity(), 183);
}

// ==================================================================================
// Spawner tests
// ==================================================================================

#[test]
fn spawner_is_deterministic() {
    let p = test_params();
    let view = test_viewport();
    let gesture = Gesture::new(NVec2::new(10.0, 10.0), NVec2::new(20.0, 15.0));

    let body = spawn_body(&gesture, &view, &p).expect("finite gesture rejected");

    assert!((body.x - NVec3::new(0.05, 0.05, 0.0)).norm() < 1e-12);
    assert!((body.v - NVec3::new(10.0 / 35.0, 5.0 / 35.0, 0.0)).norm() < 1e-12);
    assert_eq!(body.m, p.spawn_mass);
    assert!(body.trail.is_empty());
    assert!(body.name.is_none());
}

#[test]
fn spawner_rejects_non_finite_gesture() {
    let p = test_params();
    let view = test_viewport();

    let nan = Gesture::new(NVec2::new(f64::NAN, 10.0), NVec2::new(20.0, 15.0));
    assert!(spawn_body(&nan, &view, &p).is_none());

    let inf = Gesture::new(NVec2::new(10.0, 10.0), NVec2::new(f64::INFINITY, 15.0));
    assert!(spawn_body(&inf, &view, &p).is_none());
}

// ==================================================================================
// Scenario tests
// ==================================================================================

const TEST_YAML: &str = r#"
parameters:
  dt: 0.25
  G: 39.5
  eps2: 1.0e-6
  spawn_mass: 1.0055304e-25
  velocity_divisor: 35.0
viewport:
  scale: 200.0
  radius: 4.0
bodies:
  - name: "Sun"
    x: [ 0.0, 0.0, 0.0 ]
    v: [ 0.0, 0.0, 0.0 ]
    m: 1.0
  - x: [ 1.0, 0.0, 0.0 ]
    v: [ 0.0, 6.28, 0.0 ]
    m: 3.0e-6
"#;

fn test_scenario() -> Scenario {
    let cfg: ScenarioConfig = serde_yaml::from_str(TEST_YAML).expect("yaml should parse");
    Scenario::build_scenario(cfg)
}

#[test]
fn config_yaml_builds_scenario() {
    let scenario = test_scenario();

    assert_eq!(scenario.system.bodies.len(), 2);
    assert_eq!(scenario.parameters.G, 39.5);
    assert_eq!(scenario.system.t, 0.0);
    assert_eq!(scenario.system.bodies[0].name.as_deref(), Some("Sun"));
    assert!(scenario.system.bodies.iter().all(|b| b.trail.is_empty()));
}

#[test]
fn scenario_trail_capped_after_many_ticks() {
    let mut scenario = test_scenario();
    let capacity = scenario.parameters.trail_capacity(); // dt = 0.25 -> 4

    for _ in 0..10 {
        scenario.tick();
    }

    for body in &scenario.system.bodies {
        assert_eq!(body.trail.len(), capacity);
        // Newest trail entry is the current projected position
        let newest = *body.trail.iter().last().unwrap();
        let projected = scenario.viewport.project(&body.x);
        assert!((newest - projected).norm() < 1e-12);
    }
}

#[test]
fn scenario_spawn_appends_without_touching_others() {
    let mut scenario = test_scenario();
    scenario.tick();
    let sun_before = scenario.system.bodies[0].x;

    let accepted = scenario.spawn(&Gesture::new(
        NVec2::new(10.0, 10.0),
        NVec2::new(20.0, 15.0),
    ));

    assert!(accepted);
    assert_eq!(scenario.system.bodies.len(), 3);
    assert_eq!(scenario.system.bodies[0].x, sun_before);

    let rejected = scenario.spawn(&Gesture::new(
        NVec2::new(f64::NAN, 0.0),
        NVec2::new(0.0, 0.0),
    ));
    assert!(!rejected);
    assert_eq!(scenario.system.bodies.len(), 3);
}

#[test]
fn scenario_frame_reports_labels_and_recency() {
    let mut scenario = test_scenario();
    for _ in 0..3 {
        scenario.tick();
    }

    let views = scenario.frame();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].label.as_deref(), Some("Sun"));
    assert!(views[1].label.is_none());

    for view in &views {
        assert_eq!(view.trail.len(), 3);
        // Recency is i/len, strictly increasing oldest -> newest
        for (i, point) in view.trail.iter().enumerate() {
            let expected = i as f64 / view.trail.len() as f64;
            assert!((point.recency - expected).abs() < 1e-12);
        }
    }
}
