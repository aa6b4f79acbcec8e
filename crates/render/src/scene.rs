use glade_common::{Color, ObjectId};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// Where the player starts in the sample scene: eye height 2, five units
/// back from the cube.
pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 2.0, 5.0);

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Light {
    /// Uniform light from every direction.
    Ambient { color: Color, intensity: f32 },
    /// Parallel light shining from `position` toward the origin.
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

impl Light {
    /// Linear-space color scaled by intensity.
    pub fn radiance(&self) -> Vec3 {
        match self {
            Light::Ambient { color, intensity } | Light::Directional { color, intensity, .. } => {
                color.to_linear() * *intensity
            }
        }
    }

    /// Unit vector pointing toward the light, for directional lights.
    pub fn direction_to_light(&self) -> Option<Vec3> {
        match self {
            Light::Ambient { .. } => None,
            Light::Directional { position, .. } => Some(position.normalize_or_zero()),
        }
    }
}

/// Surface appearance of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
}

/// A placed, colored shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
}

/// Anything that can be added to a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneObject {
    Light(Light),
    Mesh(Mesh),
}

impl From<Light> for SceneObject {
    fn from(light: Light) -> Self {
        SceneObject::Light(light)
    }
}

impl From<Mesh> for SceneObject {
    fn from(mesh: Mesh) -> Self {
        SceneObject::Mesh(mesh)
    }
}

/// Everything a renderer draws, apart from the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub background: Color,
    objects: Vec<(ObjectId, SceneObject)>,
    next_id: u32,
}

impl Scene {
    /// Empty scene cleared to `background`.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            objects: Vec::new(),
            next_id: 0,
        }
    }

    /// The demo scene: sky background, soft white ambient light, a white
    /// sun up and to the right, and a green unit cube resting on the origin.
    pub fn meadow() -> Self {
        let mut scene = Scene::new(Color::from_hex(0x87ceeb));
        scene.add(Light::Ambient {
            color: Color::from_hex(0xffffff),
            intensity: 0.5,
        });
        scene.add(Light::Directional {
            color: Color::from_hex(0xffffff),
            intensity: 1.0,
            position: Vec3::new(5.0, 10.0, 7.0),
        });
        scene.add(Mesh {
            geometry: Geometry::cube(),
            material: Material {
                color: Color::from_hex(0x00ff00),
            },
            position: Vec3::new(0.0, 0.5, 0.0),
        });
        scene
    }

    /// Add an object and return its id.
    pub fn add(&mut self, object: impl Into<SceneObject>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let object = object.into();
        tracing::debug!(?id, ?object, "scene add");
        self.objects.push((id, object));
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, object)| object)
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.objects.iter().filter_map(|(_, object)| match object {
            SceneObject::Light(light) => Some(light),
            SceneObject::Mesh(_) => None,
        })
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.objects.iter().filter_map(|(_, object)| match object {
            SceneObject::Mesh(mesh) => Some(mesh),
            SceneObject::Light(_) => None,
        })
    }

    /// Sum of all ambient lights, linear RGB.
    pub fn ambient(&self) -> Vec3 {
        self.lights()
            .filter(|light| matches!(light, Light::Ambient { .. }))
            .map(Light::radiance)
            .sum()
    }

    /// The first directional light, if any.
    pub fn sun(&self) -> Option<&Light> {
        self.lights()
            .find(|light| matches!(light, Light::Directional { .. }))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let mut scene = Scene::default();
        assert!(scene.is_empty());
        let a = scene.add(Light::Ambient {
            color: Color::WHITE,
            intensity: 1.0,
        });
        let b = scene.add(Mesh {
            geometry: Geometry::cube(),
            material: Material { color: Color::WHITE },
            position: Vec3::ZERO,
        });
        assert_eq!(a, ObjectId(0));
        assert_eq!(b, ObjectId(1));
        assert!(matches!(scene.get(b), Some(SceneObject::Mesh(_))));
        assert!(scene.get(ObjectId(7)).is_none());
    }

    #[test]
    fn meadow_layout() {
        let scene = Scene::meadow();
        assert_eq!(scene.background.to_hex(), 0x87ceeb);
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.lights().count(), 2);

        let cube = scene.meshes().next().unwrap();
        assert_eq!(cube.material.color.to_hex(), 0x00ff00);
        assert_eq!(cube.position, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(cube.geometry.size(), Vec3::ONE);
    }

    #[test]
    fn meadow_lighting() {
        let scene = Scene::meadow();
        let ambient = scene.ambient();
        assert!((ambient - Vec3::splat(0.5)).abs().max_element() < 1e-5);

        let sun = scene.sun().unwrap();
        let dir = sun.direction_to_light().unwrap();
        assert!((dir - Vec3::new(5.0, 10.0, 7.0).normalize()).length() < 1e-6);
        assert!((sun.radiance() - Vec3::ONE).abs().max_element() < 1e-5);
    }

    #[test]
    fn ambient_lights_accumulate() {
        let mut scene = Scene::default();
        for _ in 0..2 {
            scene.add(Light::Ambient {
                color: Color::WHITE,
                intensity: 0.25,
            });
        }
        assert!((scene.ambient() - Vec3::splat(0.5)).abs().max_element() < 1e-5);
        assert!(scene.sun().is_none());
    }

    #[test]
    fn spawn_sits_on_the_ground() {
        assert_eq!(SPAWN_POINT.y, glade_kernel::MovementConfig::default().ground_height);
    }
}
