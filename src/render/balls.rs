//! Ball drawing: one filled circle per ball
//!
//! Balls keep their positions in screen space. Each frame the visible
//! transform is derived from the `Ball` record, with depth taken from the
//! insertion order so later balls cover earlier ones.

use bevy::prelude::*;

use crate::ball::{Ball, DrawOrder};
use crate::constants::*;
use crate::palette::NamedColor;
use crate::settings::Viewport;

/// Shared circle mesh and one material per palette color
#[derive(Resource, Clone)]
pub struct BallMaterials {
    pub circle: Handle<Mesh>,
    pub colors: Vec<Handle<ColorMaterial>>,
}

impl BallMaterials {
    pub fn get(&self, color: NamedColor) -> Handle<ColorMaterial> {
        self.colors[color.index()].clone()
    }
}

/// Map a screen position (origin top-left, +y down) to world space
/// (origin at the viewport center, +y up)
pub fn screen_to_world(position: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        position.x - viewport.width as f32 / 2.0,
        viewport.height as f32 / 2.0 - position.y,
    )
}

pub fn draw_depth(order: DrawOrder) -> f32 {
    order.0 as f32 * DRAW_ORDER_STEP
}

/// Create the shared circle mesh and palette materials
pub fn setup_ball_materials(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let circle = meshes.add(Circle::new(BALL_RADIUS));
    let colors = NamedColor::ALL
        .iter()
        .map(|color| materials.add(ColorMaterial::from_color(color.color())))
        .collect();

    commands.insert_resource(BallMaterials { circle, colors });
}

/// Give every freshly spawned ball its circle mesh and color
pub fn attach_ball_visuals(
    mut commands: Commands,
    viewport: Res<Viewport>,
    materials: Res<BallMaterials>,
    query: Query<(Entity, &Ball, &DrawOrder), Without<Mesh2d>>,
) {
    for (entity, ball, order) in &query {
        let world = screen_to_world(ball.position, *viewport);
        // The shared mesh is built for BALL_RADIUS
        let scale = ball.radius / BALL_RADIUS;
        commands.entity(entity).insert((
            Mesh2d(materials.circle.clone()),
            MeshMaterial2d(materials.get(ball.color)),
            Transform::from_xyz(world.x, world.y, draw_depth(*order))
                .with_scale(Vec3::new(scale, scale, 1.0)),
        ));
    }
}

/// Copy moved ball positions into their transforms.
/// Balls only change on a fixed tick, so frames between ticks touch nothing.
pub fn sync_ball_transforms(
    viewport: Res<Viewport>,
    mut query: Query<(&Ball, &mut Transform), Changed<Ball>>,
) {
    for (ball, mut transform) in &mut query {
        let world = screen_to_world(ball.position, *viewport);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_corners() {
        let viewport = Viewport {
            width: 800,
            height: 450,
        };
        assert_eq!(screen_to_world(Vec2::ZERO, viewport), Vec2::new(-400.0, 225.0));
        assert_eq!(
            screen_to_world(Vec2::new(800.0, 450.0), viewport),
            Vec2::new(400.0, -225.0)
        );
        assert_eq!(screen_to_world(Vec2::new(400.0, 225.0), viewport), Vec2::ZERO);
    }

    #[test]
    fn test_later_balls_draw_on_top() {
        assert!(draw_depth(DrawOrder(1)) > draw_depth(DrawOrder(0)));
        assert!(draw_depth(DrawOrder(NUM_BALLS as u32)) < 1.0);
    }

    fn render_app() -> App {
        let mut app = App::new();
        app.init_resource::<Viewport>();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<ColorMaterial>>();
        app.add_systems(Startup, setup_ball_materials);
        app.add_systems(PostStartup, attach_ball_visuals);
        app
    }

    #[test]
    fn test_materials_cover_palette() {
        let mut app = render_app();
        app.update();

        let materials = app.world().resource::<BallMaterials>();
        assert_eq!(materials.colors.len(), NamedColor::ALL.len());
        let assets = app.world().resource::<Assets<ColorMaterial>>();
        for color in NamedColor::ALL {
            let material = assets.get(&materials.get(color)).unwrap();
            assert_eq!(material.color, color.color(), "{}", color.name());
        }
    }

    #[test]
    fn test_attach_gives_each_ball_its_mesh_color_and_depth() {
        let mut app = render_app();
        let colors = [NamedColor::Red, NamedColor::SkyBlue, NamedColor::Red];
        let entities: Vec<Entity> = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let ball = Ball::new(Vec2::new(100.0 + i as f32, 50.0), Vec2::ONE, 20.0, color);
                app.world_mut().spawn((ball, DrawOrder(i as u32))).id()
            })
            .collect();

        app.update();

        let materials = app.world().resource::<BallMaterials>().clone();
        let mut depths = Vec::new();
        for (entity, color) in entities.iter().zip(colors) {
            let mesh = app.world().get::<Mesh2d>(*entity).unwrap();
            assert_eq!(mesh.0, materials.circle);
            let material = app
                .world()
                .get::<MeshMaterial2d<ColorMaterial>>(*entity)
                .unwrap();
            assert_eq!(material.0, materials.get(color));
            depths.push(app.world().get::<Transform>(*entity).unwrap().translation.z);
        }

        let expected: Vec<f32> = (0..3).map(|i| draw_depth(DrawOrder(i))).collect();
        assert_eq!(depths, expected);
        // Insertion order is draw order
        assert!(depths.windows(2).all(|pair| pair[0] < pair[1]));

        let meshed = app
            .world_mut()
            .query_filtered::<Entity, With<Mesh2d>>()
            .iter(app.world())
            .count();
        assert_eq!(meshed, 3);
    }

    #[test]
    fn test_attach_maps_position_to_world() {
        let mut app = render_app();
        let entity = app
            .world_mut()
            .spawn((
                Ball::new(Vec2::new(20.0, 430.0), Vec2::ZERO, 20.0, NamedColor::Lime),
                DrawOrder(0),
            ))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation.truncate(), Vec2::new(-380.0, -205.0));
        assert_eq!(transform.scale, Vec3::ONE);
    }

    #[test]
    fn test_sync_skips_unmoved_balls() {
        let mut app = App::new();
        app.init_resource::<Viewport>();
        app.add_systems(Update, sync_ball_transforms);

        let entity = app
            .world_mut()
            .spawn((
                Ball::new(Vec2::new(100.0, 50.0), Vec2::ZERO, 20.0, NamedColor::Gold),
                Transform::default(),
            ))
            .id();
        app.update();

        // Nothing moved the ball since the last sync
        app.world_mut().get_mut::<Transform>(entity).unwrap().translation.x = 7.0;
        app.update();
        assert_eq!(app.world().get::<Transform>(entity).unwrap().translation.x, 7.0);

        app.world_mut().get_mut::<Ball>(entity).unwrap().position.x = 200.0;
        app.update();
        assert_eq!(app.world().get::<Transform>(entity).unwrap().translation.x, -200.0);
    }

    #[test]
    fn test_sync_keeps_depth() {
        let mut app = App::new();
        app.init_resource::<Viewport>();
        app.add_systems(Update, sync_ball_transforms);

        let entity = app
            .world_mut()
            .spawn((
                Ball::new(
                    Vec2::new(100.0, 50.0),
                    Vec2::ZERO,
                    20.0,
                    NamedColor::Gold,
                ),
                Transform::from_xyz(0.0, 0.0, 0.25),
            ))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(-300.0, 175.0, 0.25));
    }
}
