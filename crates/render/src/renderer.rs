use crate::camera::FirstPersonCamera;
use crate::geometry::Geometry;
use crate::scene::{Light, Scene, SceneObject};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and the camera, then produces output. It
/// never mutates either.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `scene` as seen from `camera`.
    fn render(&self, scene: &Scene, camera: &FirstPersonCamera) -> Self::Output;

    /// Follow a viewport size change.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Renders a frame as human-readable text.
///
/// Used by the CLI and in tests where no GPU is available.
#[derive(Debug, Clone, Copy)]
pub struct DebugTextRenderer {
    width: u32,
    height: u32,
}

impl DebugTextRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for DebugTextRenderer {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, camera: &FirstPersonCamera) -> String {
        let mut out = String::new();
        let p = camera.position;
        out.push_str(&format!("=== Frame ({}x{}) ===\n", self.width, self.height));
        out.push_str(&format!("Background: #{:06x}\n", scene.background.to_hex()));
        out.push_str(&format!(
            "Camera: pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1} fov={:.0}\n",
            p.x,
            p.y,
            p.z,
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
            camera.fov.to_degrees()
        ));
        out.push_str(&format!("Objects: {}\n", scene.len()));

        for (id, object) in scene.objects() {
            let line = match object {
                SceneObject::Light(Light::Ambient { color, intensity }) => format!(
                    "  [{}] ambient #{:06x} x{:.2}\n",
                    id.0,
                    color.to_hex(),
                    intensity
                ),
                SceneObject::Light(Light::Directional {
                    color,
                    intensity,
                    position,
                }) => format!(
                    "  [{}] directional #{:06x} x{:.2} from ({:.1}, {:.1}, {:.1})\n",
                    id.0,
                    color.to_hex(),
                    intensity,
                    position.x,
                    position.y,
                    position.z
                ),
                SceneObject::Mesh(mesh) => {
                    let Geometry::Cuboid { size } = mesh.geometry;
                    format!(
                        "  [{}] cuboid {:.1}x{:.1}x{:.1} #{:06x} at ({:.2}, {:.2}, {:.2})\n",
                        id.0,
                        size.x,
                        size.y,
                        size.z,
                        mesh.material.color.to_hex(),
                        mesh.position.x,
                        mesh.position.y,
                        mesh.position.z
                    )
                }
            };
            out.push_str(&line);
        }

        out
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SPAWN_POINT;
    use glade_common::Color;

    #[test]
    fn empty_scene() {
        let renderer = DebugTextRenderer::default();
        let output = renderer.render(&Scene::new(Color::BLACK), &FirstPersonCamera::default());
        assert!(output.contains("Background: #000000"));
        assert!(output.contains("Objects: 0"));
    }

    #[test]
    fn meadow_frame() {
        let renderer = DebugTextRenderer::default();
        let camera = FirstPersonCamera::default().with_position(SPAWN_POINT);
        let output = renderer.render(&Scene::meadow(), &camera);

        assert!(output.contains("#87ceeb"));
        assert!(output.contains("pos=(0.00, 2.00, 5.00)"));
        assert!(output.contains("fov=75"));
        assert!(output.contains("ambient #ffffff x0.50"));
        assert!(output.contains("directional #ffffff x1.00 from (5.0, 10.0, 7.0)"));
        assert!(output.contains("cuboid 1.0x1.0x1.0 #00ff00 at (0.00, 0.50, 0.00)"));
    }

    #[test]
    fn one_line_per_header_and_object() {
        let renderer = DebugTextRenderer::default();
        let output = renderer.render(&Scene::meadow(), &FirstPersonCamera::default());
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 4 + 3);
        assert!(output.lines().nth(4).unwrap().starts_with("  [0] ambient"));
    }

    #[test]
    fn resize_updates_header() {
        let mut renderer = DebugTextRenderer::default();
        renderer.resize(640, 480);
        assert_eq!(renderer.viewport(), (640, 480));
        let output = renderer.render(&Scene::default(), &FirstPersonCamera::default());
        assert!(output.starts_with("=== Frame (640x480) ==="));
    }
}
