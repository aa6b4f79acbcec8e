use glam::Vec3;

/// A movable eye the integrator steers.
///
/// Implementors own orientation; `move_forward` and `move_right` translate
/// along the look-aligned horizontal axes, so the integrator never rotates
/// anything itself.
pub trait Viewpoint {
    /// Translate along the horizontal forward axis.
    fn move_forward(&mut self, distance: f32);

    /// Translate along the right axis.
    fn move_right(&mut self, distance: f32);

    /// World-space position.
    fn position(&self) -> Vec3;

    /// Overwrite the vertical coordinate.
    fn set_height(&mut self, y: f32);

    fn height(&self) -> f32 {
        self.position().y
    }
}
