use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

// Arrow mesh dimensions at unit scale, along -Z of the arrow's parent.
const ARROW_SHAFT_LENGTH: f32 = 2.0;
const ARROW_HEAD_LENGTH: f32 = 0.5;
pub const ARROW_LENGTH: f32 = ARROW_SHAFT_LENGTH + ARROW_HEAD_LENGTH;

pub fn close_on_esc(
    mut commands: Commands,
    focused_windows: Query<(Entity, &Window)>,
    input: Res<ButtonInput<KeyCode>>,
) {
    for (window, focus) in focused_windows.iter() {
        if !focus.focused {
            continue;
        }

        if input.just_pressed(KeyCode::Escape) {
            commands.entity(window).despawn();
        }
    }
}

/// Next frame index, wrapping to the start so the animation repeats.
pub fn advance_frame(cur_i: usize, n_frames: usize) -> usize {
    if n_frames == 0 {
        0
    } else {
        (cur_i + 1) % n_frames
    }
}

#[derive(Component)]
pub struct ArrowMesh;

pub fn spawn_arrow(
    parent: &mut ChildBuilder,
    meshes: &mut ResMut<Assets<Mesh>>,
    material: Handle<StandardMaterial>,
) {
    let transform_mesh = Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2));
    let cone: Handle<Mesh> = meshes.add(
        Cone {
            radius: 0.5,
            height: ARROW_HEAD_LENGTH,
        }
        .mesh()
        .resolution(16)
        .build(),
    );
    let cylinder: Handle<Mesh> = meshes.add(
        Cylinder::new(0.3, ARROW_SHAFT_LENGTH)
            .mesh()
            .resolution(16)
            .build(),
    );

    // Both primitives are centred on their midpoints, so shift each back by
    // half its length to line them up tip to tail.
    parent.spawn((
        Mesh3d(cone),
        MeshMaterial3d(material.clone()),
        transform_mesh
            .with_translation(-Vec3::Z * (ARROW_SHAFT_LENGTH + ARROW_HEAD_LENGTH / 2.0)),
        ArrowMesh,
    ));
    parent.spawn((
        Mesh3d(cylinder),
        MeshMaterial3d(material),
        transform_mesh.with_translation(-Vec3::Z * ARROW_SHAFT_LENGTH / 2.0),
        ArrowMesh,
    ));
}
