use bevy::{color::palettes::css, prelude::*, render::mesh::SphereKind};

use crate::geometry::circle_path;

use super::{
    common::{spawn_arrow, ARROW_LENGTH},
    environment::Environment,
    PlaybackState, TrajectoryRes,
};

// Sizes relative to the scene half-width.
const PARTICLE_RADIUS: f32 = 0.05;
const MARKER_RADIUS: f32 = 0.03;
const ARROW_WIDTH: f32 = 0.04;

const CIRCLE_SEGMENTS: usize = 128;

#[derive(Component)]
pub struct Particle;

#[derive(Component)]
pub struct ProjectionMarker;

#[derive(Component)]
pub struct ForceArrow;

/// Full circular path in world coordinates, drawn faintly for reference.
#[derive(Resource)]
pub struct ReferencePath(pub Vec<Vec3>);

impl ReferencePath {
    pub fn new(env: &Environment, radius: f64) -> Self {
        ReferencePath(
            circle_path(radius, CIRCLE_SEGMENTS)
                .iter()
                .map(|p| env.transformed_point3(p))
                .collect(),
        )
    }
}

/// Place an arrow of unit-scale length [`ARROW_LENGTH`] at `origin` so it spans
/// `force`. `None` when there is no direction to point in.
pub fn force_arrow_transform(origin: Vec3, force: Vec3, width: f32) -> Option<Transform> {
    let direction = force.try_normalize()?;
    Some(
        Transform::from_translation(origin)
            .looking_to(direction, Vec3::Y)
            .with_scale(Vec3::new(width, width, force.length() / ARROW_LENGTH)),
    )
}

pub fn add_scene_objects(
    mut commands: Commands,
    env: Res<Environment>,
    trajectory: Res<TrajectoryRes>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let scale = env.transformed_space_limit();
    commands.insert_resource(ReferencePath::new(&env, trajectory.0.params().radius));

    let sphere = |radius: f32| {
        Sphere::new(radius)
            .mesh()
            .kind(SphereKind::Uv {
                sectors: 18,
                stacks: 9,
            })
            .build()
    };

    commands.spawn((
        Mesh3d(meshes.add(sphere(PARTICLE_RADIUS * scale))),
        MeshMaterial3d(materials.add(StandardMaterial::from(Color::from(css::RED)))),
        Transform::default(),
        Particle,
    ));
    commands.spawn((
        Mesh3d(meshes.add(sphere(MARKER_RADIUS * scale))),
        MeshMaterial3d(materials.add(StandardMaterial::from(Color::from(css::GREEN)))),
        Transform::default(),
        ProjectionMarker,
    ));

    let orange = materials.add(StandardMaterial::from(Color::from(css::ORANGE)));
    commands
        .spawn((Transform::default(), Visibility::Hidden, ForceArrow))
        .with_children(|parent| {
            spawn_arrow(parent, &mut meshes, orange);
        });
}

pub fn update_scene_objects(
    env: Res<Environment>,
    trajectory: Res<TrajectoryRes>,
    playback: Res<PlaybackState>,
    mut q_particle: Query<&mut Transform, (With<Particle>, Without<ProjectionMarker>)>,
    mut q_marker: Query<&mut Transform, (With<ProjectionMarker>, Without<Particle>)>,
    mut q_arrow: Query<
        (&mut Transform, &mut Visibility),
        (With<ForceArrow>, Without<Particle>, Without<ProjectionMarker>),
    >,
) {
    let Some(view) = playback.current(&trajectory) else {
        return;
    };
    let particle = env.transformed_point3(&view.frame.position());

    for mut transform in &mut q_particle {
        transform.translation = particle;
    }
    for mut transform in &mut q_marker {
        transform.translation = env.transformed_point3(&view.projection_point());
    }

    let width = ARROW_WIDTH * env.transformed_space_limit();
    let force = env.transformed_vec3(&view.force);
    for (mut transform, mut visibility) in &mut q_arrow {
        match force_arrow_transform(particle, force, width) {
            Some(arrow) => {
                *transform = arrow;
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

pub fn draw_guides(
    env: Res<Environment>,
    path: Res<ReferencePath>,
    trajectory: Res<TrajectoryRes>,
    playback: Res<PlaybackState>,
    mut gizmos: Gizmos,
) {
    gizmos.linestrip(path.0.iter().copied(), css::GRAY.with_alpha(0.5));

    let Some(view) = playback.current(&trajectory) else {
        return;
    };

    let (centre, particle) = view.radius_segment();
    gizmos.line(
        env.transformed_point3(&centre),
        env.transformed_point3(&particle),
        css::RED,
    );

    // The axis the projection oscillates along.
    let r = trajectory.0.params().radius;
    gizmos.line(
        env.transformed_vec3(&(-r * nalgebra::Vector3::x())),
        env.transformed_vec3(&(r * nalgebra::Vector3::x())),
        css::DARK_GREEN,
    );

    let (from, to) = view.projection_segment();
    gizmos.line(
        env.transformed_point3(&from),
        env.transformed_point3(&to),
        css::GREEN,
    );
}
