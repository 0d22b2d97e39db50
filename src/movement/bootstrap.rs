//! Movement domain: player, test ground and camera spawning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CameraBoom, CharacterMotor, ControlRotation, GameLayer, Ground, LocomotionState,
    LocomotionTuning, MovementState, Player,
};

const GROUND_SIZE: f32 = 120.0;
const GROUND_THICKNESS: f32 = 0.2;
const MARKER_SPACING: f32 = 12.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = tuning.capsule_radius;
    let segment = (tuning.capsule_height - 2.0 * radius).max(0.0);

    // Base speed is captured from the motor as spawned
    let motor = CharacterMotor::new(tuning.base_walk_speed);
    let locomotion = LocomotionState::new(motor.max_speed);

    info!(
        "Spawning player: base_speed={}, capsule r={} h={}",
        locomotion.base_speed(),
        radius,
        tuning.capsule_height
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            locomotion,
            motor,
            MovementState::default(),
            ControlRotation::default(),
        ),
        // Rendering
        (
            Mesh3d(meshes.add(Capsule3d::new(radius, segment))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.85, 0.95),
                ..default()
            })),
            Transform::from_xyz(0.0, tuning.capsule_height * 0.5 + 0.05, 0.0),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(radius, segment),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

pub(crate) fn spawn_camera(mut commands: Commands, tuning: Res<LocomotionTuning>) {
    commands.spawn((
        Camera3d::default(),
        CameraBoom {
            arm_length: tuning.camera_arm_length,
            pivot_height: tuning.capsule_height * 0.4,
        },
        Transform::from_xyz(0.0, 2.0, tuning.camera_arm_length).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn spawn_test_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.4, 0.5, 0.4),
            ..default()
        })),
        Transform::from_xyz(0.0, -GROUND_THICKNESS * 0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE),
        ground_layers,
    ));

    // Posts on a grid so speed changes are readable
    let post_mesh = meshes.add(Cuboid::new(0.3, 1.5, 0.3));
    let post_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.4, 0.3),
        ..default()
    });
    let half_steps = (GROUND_SIZE * 0.5 / MARKER_SPACING) as i32;
    for x in -half_steps..=half_steps {
        for z in -half_steps..=half_steps {
            if x == 0 && z == 0 {
                continue;
            }
            commands.spawn((
                Mesh3d(post_mesh.clone()),
                MeshMaterial3d(post_material.clone()),
                Transform::from_xyz(x as f32 * MARKER_SPACING, 0.75, z as f32 * MARKER_SPACING),
            ));
        }
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
