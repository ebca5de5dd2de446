//! Bevy 2D viewer for a running scenario
//!
//! Drives one simulation tick per frame, syncs one mesh circle per body,
//! draws fading trails with gizmos, and turns left-button drags into
//! spawn gestures. The core works in canvas-convention screen pixels
//! (origin top-left, y down); this module owns the conversion to Bevy's
//! centered, y-up world space.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, Window};

use crate::simulation::scenario::Scenario;
use crate::simulation::spawn::Gesture;
use crate::simulation::states::NVec2;

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging a label with the index of the body it follows
#[derive(Component)]
struct BodyLabel(pub usize);

/// In-progress drag gesture, in screen pixels
#[derive(Resource, Default)]
struct DragState {
    press: Option<Vec2>,
    current: Vec2,
}

/// Label offset from the body marker, screen pixels
const LABEL_OFFSET: Vec2 = Vec2::new(12.0, 4.0);

pub fn run_viewer(scenario: Scenario) {
    log::info!(
        "run_viewer: starting Bevy 2D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(DragState::default())
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                sync_viewport_system,
                gesture_system,
                physics_tick_system,
                spawn_markers_system,
                sync_markers_system,
                draw_trails_system,
                draw_drag_system,
            )
                .chain(),
        )
        .run();
}

/// Canvas-convention screen pixels -> Bevy world coordinates
fn screen_to_world(screen: NVec2, window: &Window) -> Vec2 {
    Vec2::new(
        screen.x as f32 - window.width() / 2.0,
        window.height() / 2.0 - screen.y as f32,
    )
}

fn setup_scene_system(mut commands: Commands, scenario: Res<Scenario>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // Labels for the named starting bodies; spawned bodies are unnamed,
    // so the label set is fixed at startup
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        if let Some(name) = &body.name {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        name.clone(),
                        TextStyle {
                            font_size: 12.0,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(0.0, 0.0, 1.0),
                    ..Default::default()
                },
                BodyLabel(i),
            ));
        }
    }
}

/// Keep the viewport center at the middle of the actual window, so the
/// simulation origin stays centered across resizes
fn sync_viewport_system(
    mut scenario: ResMut<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    scenario.viewport.center = NVec2::new(
        window.width() as f64 / 2.0,
        window.height() as f64 / 2.0,
    );
}

/// Per-frame physics: exactly one fixed-dt tick, regardless of wall clock
fn physics_tick_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

/// Spawn a mesh circle for every body that does not have one yet
/// (the initial set on the first frame, gesture-spawned bodies later)
fn spawn_markers_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    markers: Query<&BodyIndex>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let covered = markers.iter().count();

    for i in covered..scenario.system.bodies.len() {
        let radius = scenario.viewport.radius as f32;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(0.0, 0.0, 0.5),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Move markers and labels to the freshly projected body positions
fn sync_markers_system(
    scenario: Res<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut markers: Query<(&BodyIndex, &mut Transform), Without<BodyLabel>>,
    mut labels: Query<(&BodyLabel, &mut Transform), Without<BodyIndex>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    for (BodyIndex(i), mut transform) in &mut markers {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let world = screen_to_world(scenario.viewport.project(&b.x), window);
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }

    for (BodyLabel(i), mut transform) in &mut labels {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let screen = scenario.viewport.project(&b.x)
                + NVec2::new(LABEL_OFFSET.x as f64, LABEL_OFFSET.y as f64);
            let world = screen_to_world(screen, window);
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }
}

/// Draw every body's trail as fading, shrinking circles
///
/// The newest point is drawn at full opacity and size; older points scale
/// with their recency fraction, halving the opacity so the trace reads as
/// a tail rather than a solid line.
fn draw_trails_system(
    scenario: Res<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let radius = scenario.viewport.radius as f32;

    for view in scenario.frame() {
        let count = view.trail.len();
        for (i, point) in view.trail.iter().enumerate() {
            let (alpha, size) = if i + 1 == count {
                (1.0, 1.0)
            } else {
                (point.recency as f32 / 2.0, point.recency as f32)
            };
            if size <= 0.0 {
                continue;
            }
            gizmos.circle_2d(
                screen_to_world(point.screen, window),
                size * radius,
                Color::srgba(1.0, 1.0, 1.0, alpha),
            );
        }
    }
}

/// Track left-button drags and hand the completed gesture to the scenario
fn gesture_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<DragState>,
    mut scenario: ResMut<Scenario>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    // cursor_position is already canvas-convention (top-left, y down)
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            drag.press = Some(pos);
            drag.current = pos;
        }
    }

    if let Some(pos) = cursor {
        if drag.press.is_some() {
            drag.current = pos;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        if let Some(press) = drag.press.take() {
            let release = cursor.unwrap_or(drag.current);
            let gesture = Gesture::new(
                NVec2::new(press.x as f64, press.y as f64),
                NVec2::new(release.x as f64, release.y as f64),
            );
            if scenario.spawn(&gesture) {
                log::info!(
                    "spawned body #{} from gesture {:?}",
                    scenario.system.bodies.len() - 1,
                    gesture
                );
            }
        }
    }
}

/// Red preview line from the press point to the current cursor position
fn draw_drag_system(
    drag: Res<DragState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(press) = drag.press {
        gizmos.line_2d(
            screen_to_world(NVec2::new(press.x as f64, press.y as f64), window),
            screen_to_world(NVec2::new(drag.current.x as f64, drag.current.y as f64), window),
            Color::srgb(1.0, 0.0, 0.0),
        );
    }
}
