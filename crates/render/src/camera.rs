use glade_kernel::Viewpoint;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Mouse-look rotation per pixel of pointer motion, before `look_speed`.
const LOOK_RADIANS_PER_PIXEL: f32 = 0.002;

/// First-person camera driven by pointer-locked mouse-look.
///
/// Orientation is yaw then pitch (no roll); yaw 0 looks down -Z. Walking
/// moves along the horizontal projection of the look direction, so looking
/// up or down never changes walking speed.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub look_speed: f32,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(75.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

impl FirstPersonCamera {
    /// Perspective camera at the origin looking down -Z.
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
            look_speed: 1.0,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Look direction, including pitch.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Local +X axis. Always horizontal since there is no roll.
    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Walking direction: up cross right.
    pub fn walk_forward(&self) -> Vec3 {
        Vec3::Y.cross(self.right())
    }

    /// Apply a pointer-locked mouse delta in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let step = LOOK_RADIANS_PER_PIXEL * self.look_speed;
        self.yaw -= dx * step;
        self.pitch = (self.pitch - dy * step).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Track the viewport size.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Viewpoint for FirstPersonCamera {
    fn move_forward(&mut self, distance: f32) {
        self.position += self.walk_forward() * distance;
    }

    fn move_right(&mut self, distance: f32) {
        self.position += self.right() * distance;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_height(&mut self, y: f32) {
        self.position.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glade_common::InputIntent;
    use glade_kernel::Player;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn default_camera() {
        let cam = FirstPersonCamera::default();
        assert!((cam.fov - 75.0_f32.to_radians()).abs() < 1e-6);
        assert!(close(cam.forward(), Vec3::NEG_Z));
        assert!(close(cam.right(), Vec3::X));
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn walking_follows_yaw() {
        let mut cam = FirstPersonCamera::default();
        cam.move_forward(2.0);
        assert!(close(cam.position, Vec3::new(0.0, 0.0, -2.0)));
        cam.move_right(1.0);
        assert!(close(cam.position, Vec3::new(1.0, 0.0, -2.0)));

        let mut turned = FirstPersonCamera::default();
        turned.yaw = FRAC_PI_2;
        turned.move_forward(1.0);
        assert!(close(turned.position, Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn pitch_does_not_change_walking() {
        let mut cam = FirstPersonCamera::default();
        cam.pitch = 1.2;
        cam.move_forward(3.0);
        assert!(close(cam.position, Vec3::new(0.0, 0.0, -3.0)));
        assert!(cam.forward().y > 0.9);
    }

    #[test]
    fn mouse_right_turns_right() {
        let mut cam = FirstPersonCamera::default();
        cam.rotate(FRAC_PI_2 / LOOK_RADIANS_PER_PIXEL, 0.0);
        assert!(close(cam.forward(), Vec3::X));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = FirstPersonCamera::default();
        cam.rotate(0.0, -10_000.0);
        assert_eq!(cam.pitch, FRAC_PI_2);
        cam.rotate(0.0, 20_000.0);
        assert_eq!(cam.pitch, -FRAC_PI_2);
        assert!(!cam.view_matrix().col(0).x.is_nan());
    }

    #[test]
    fn look_speed_scales_rotation() {
        let mut slow = FirstPersonCamera::default();
        let mut fast = FirstPersonCamera::default();
        fast.look_speed = 2.0;
        slow.rotate(10.0, 0.0);
        fast.rotate(10.0, 0.0);
        assert!((fast.yaw - 2.0 * slow.yaw).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let cam = FirstPersonCamera::default().with_position(Vec3::new(0.0, 2.0, 5.0));
        let eye = cam.view_matrix().transform_point3(cam.position);
        assert!(close(eye, Vec3::ZERO));
        let ahead = cam.view_matrix().transform_point3(Vec3::new(0.0, 2.0, 0.0));
        assert!(close(ahead, Vec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn aspect_tracks_viewport() {
        let mut cam = FirstPersonCamera::default();
        cam.set_aspect(800, 400);
        assert_eq!(cam.aspect, 2.0);
        cam.set_aspect(800, 0);
        assert_eq!(cam.aspect, 800.0);
    }

    /// Hold forward for one second at 60 Hz from the spawn point and compare
    /// against the same formulas integrated by hand.
    #[test]
    fn one_second_walk_matches_reference() {
        let mut cam = FirstPersonCamera::default().with_position(Vec3::new(0.0, 2.0, 5.0));
        let mut player = Player::new();
        let intent = InputIntent {
            forward: true,
            ..InputIntent::default()
        };
        let dt = 1.0_f32 / 60.0;
        for _ in 0..60 {
            player.tick(intent, dt, &mut cam);
        }

        let (mut vz, mut travelled) = (0.0_f64, 0.0_f64);
        let dt64 = 1.0_f64 / 60.0;
        for _ in 0..60 {
            vz -= vz * 10.0 * dt64;
            vz -= 400.0 * dt64;
            travelled += -vz * dt64;
        }

        let moved = 5.0 - cam.position.z as f64;
        assert!(moved > 0.0);
        assert!((moved - travelled).abs() < 1e-3, "{moved} vs {travelled}");
        assert!(moved > 30.0 && moved < 40.0);
        assert_eq!(cam.position.x, 0.0);
        assert_eq!(cam.position.y, 2.0);
        assert!(player.is_grounded());
    }
}
