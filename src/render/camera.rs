// View and projection matrices shared by the demos

use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Distance from the eye to the model origin.
pub const EYE_DISTANCE: f32 = 12.0;

pub fn aspect(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

fn eye() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -EYE_DISTANCE))
}

/// Pushes the model back and turns it `angle` radians about `axis`.
pub fn view_spin(angle: f32, axis: Vec3) -> Mat4 {
    eye() * Mat4::from_axis_angle(axis.normalize_or(Vec3::Y), angle)
}

/// Drag rotation: `rx` turns about the vertical axis, `ry` about the horizontal.
pub fn view_drag((rx, ry): (f32, f32)) -> Mat4 {
    eye() * Mat4::from_rotation_y(rx) * Mat4::from_rotation_x(ry)
}

pub fn normal_matrix(view: &Mat4) -> Mat4 {
    view.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn aspect_guards_zero_height() {
        assert_eq!(aspect(800, 400), 2.0);
        assert_eq!(aspect(800, 0), 1.0);
    }

    #[test]
    fn unrotated_view_only_translates() {
        let v = view_drag((0.0, 0.0));
        let p = v * Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert!(approx(p.truncate(), Vec3::new(1.0, 2.0, 3.0 - EYE_DISTANCE)));
        assert!(view_spin(0.0, Vec3::new(0.0, 1.0, 1.0)).abs_diff_eq(v, 1e-6));
    }

    #[test]
    fn drag_rx_turns_about_y() {
        let v = view_drag((std::f32::consts::FRAC_PI_2, 0.0));
        let p = v.transform_vector3(Vec3::X);
        assert!(approx(p, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn drag_ry_turns_about_x() {
        let v = view_drag((0.0, std::f32::consts::FRAC_PI_2));
        let p = v.transform_vector3(Vec3::Y);
        assert!(approx(p, Vec3::Z));
    }

    #[test]
    fn spin_axis_is_normalised() {
        let a = view_spin(0.7, Vec3::new(0.0, 1.0, 1.0));
        let b = view_spin(0.7, Vec3::new(0.0, 5.0, 5.0));
        assert!(a.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn projection_maps_near_plane_to_minus_one() {
        let p = projection(1.0);
        let clip = p * Vec4::new(0.0, 0.0, -Z_NEAR, 1.0);
        assert!((clip.z / clip.w + 1.0).abs() < 1e-4);
        let clip = p * Vec4::new(0.0, 0.0, -Z_FAR, 1.0);
        assert!((clip.z / clip.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn normals_follow_rotation_not_translation() {
        let v = view_drag((std::f32::consts::FRAC_PI_2, 0.0));
        let n = normal_matrix(&v).transform_vector3(Vec3::X);
        assert!(approx(n, Vec3::new(0.0, 0.0, -1.0)));
    }
}
