//! Shape generation for 2D primitives

use glam::{Mat4, Quat, Vec2, Vec3};

use super::vertex::Vertex;

/// Corners of the unit quad, counter-clockwise from bottom-left
pub const UNIT_QUAD: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

/// Model transform placing the unit quad at `center` with the given size
pub fn quad_transform(center: Vec2, size: Vec2) -> Mat4 {
    Mat4::from_scale_rotation_translation(size.extend(1.0), Quat::IDENTITY, center.extend(0.0))
}

/// Transform taking the unit quad to the full NDC square (-1..1)
pub fn fullscreen_transform() -> Mat4 {
    Mat4::from_scale(Vec3::new(2.0, 2.0, 1.0))
}

/// Two triangles for the unit quad under `mvp`, already in NDC
pub fn quad(mvp: Mat4, color: [f32; 4]) -> [Vertex; 6] {
    let [bl, br, tr, tl] = UNIT_QUAD.map(|corner| {
        let p = mvp.project_point3(corner.extend(0.0));
        Vertex::new(p.x, p.y, color)
    });
    [bl, br, tr, tr, tl, bl]
}
