//! Arena-backed scene graph.
//!
//! Nodes live in a flat `Vec` and refer to their parent by index, so world
//! transforms are resolved by walking up the chain. Parents are always inserted
//! before their children.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::camera::PerspectiveCamera;
use crate::geometry::Geometry;
use crate::light::{AmbientLight, PointLight};
use crate::material::Material;

/// Index of a node in its [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

/// Local transform: translation plus XYZ-order Euler rotation (radians).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// What a node contributes to the rendered image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum NodeKind {
    /// Pure transform; groups children so they move together.
    Group,
    Mesh {
        geometry: Geometry,
        material: Material,
    },
    Camera(PerspectiveCamera),
    AmbientLight(AmbientLight),
    PointLight(PointLight),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub transform: Transform,
    pub kind: NodeKind,
}

/// Flat scene graph.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent` (or at the root) and return its id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        transform: Transform,
        kind: NodeKind,
    ) -> NodeId {
        debug_assert!(parent.is_none_or(|p| p.0 < self.nodes.len()));
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            parent,
            transform,
            kind,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(id.0).map(|node| &mut node.transform)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(move |(_, node)| node.parent == Some(parent))
            .map(|(id, _)| id)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| id)
    }

    /// Composite transform from the node's local space to world space.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = self.get(id);
        while let Some(node) = current {
            matrix = node.transform.matrix() * matrix;
            current = node.parent.and_then(|p| self.get(p));
        }
        matrix
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_follows_parent() {
        let mut graph = SceneGraph::new();
        let group = graph.add(
            "group",
            None,
            Transform::at(Vec3::new(10.0, 0.0, 0.0)),
            NodeKind::Group,
        );
        let child = graph.add(
            "child",
            Some(group),
            Transform::at(Vec3::new(0.0, 0.0, 5.0)),
            NodeKind::Group,
        );
        assert_eq!(graph.world_position(child), Vec3::new(10.0, 0.0, 5.0));

        graph.transform_mut(group).unwrap().position = Vec3::new(-3.0, 1.0, 0.0);
        assert_eq!(graph.world_position(child), Vec3::new(-3.0, 1.0, 5.0));
    }

    #[test]
    fn test_parent_rotation_applies_to_child() {
        let mut graph = SceneGraph::new();
        let group = graph.add(
            "group",
            None,
            Transform {
                position: Vec3::ZERO,
                rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            },
            NodeKind::Group,
        );
        let child = graph.add(
            "child",
            Some(group),
            Transform::at(Vec3::X),
            NodeKind::Group,
        );
        let p = graph.world_position(child);
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5, "{p}");
    }

    #[test]
    fn test_find_and_children() {
        let mut graph = SceneGraph::new();
        let root = graph.add("root", None, Transform::default(), NodeKind::Group);
        graph.add("a", Some(root), Transform::default(), NodeKind::Group);
        graph.add("b", Some(root), Transform::default(), NodeKind::Group);
        assert_eq!(graph.children(root).count(), 2);
        assert_eq!(graph.find("b"), Some(NodeId(2)));
        assert_eq!(graph.find("c"), None);
    }
}
