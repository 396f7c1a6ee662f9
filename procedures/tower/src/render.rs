use crate::generator::Tower;
use bevy::prelude::*;
use render_item::{
	mesh::{
		cache::handle::map::HandleMap, handle::MeshHandle, IdentifiedMesh, MeshBuilder,
		MeshFetcher, MeshId,
	},
	RenderItem,
};

/// Radius 1, height 1 cylinder centered on the origin, scaled into place per floor.
#[derive(Debug, Clone)]
pub struct UnitCylinder {
	resolution: u32,
}

impl UnitCylinder {
	pub fn new(resolution: u32) -> Self {
		Self { resolution }
	}
}

impl Default for UnitCylinder {
	fn default() -> Self {
		Self::new(64)
	}
}

impl MeshBuilder for UnitCylinder {
	fn build_mesh(&self) -> Option<Mesh> {
		Some(Mesh::from(Cylinder::new(1.0, 1.0).mesh().resolution(self.resolution)))
	}
}

impl IdentifiedMesh for UnitCylinder {
	fn id(&self) -> MeshId {
		MeshId::new(format!("{:?}", self))
	}
}

/// Marks a spawned floor slab.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerFloor {
	pub index: usize,
}

#[derive(Debug, Clone)]
pub struct TowerRenderer {
	tower: Tower,
	slab: MeshHandle<UnitCylinder>,
	roughness: f32,
	metallic: f32,
}

impl TowerRenderer {
	pub fn new(tower: Tower) -> Self {
		Self { tower, slab: MeshHandle::new(UnitCylinder::default()), roughness: 0.45, metallic: 0.15 }
	}

	/// Shares slab meshes through `handle_cache` rather than building one per renderer.
	pub fn with_handle_cache(mut self, handle_cache: HandleMap) -> Self {
		self.slab = self.slab.with_handle_cache(handle_cache);
		self
	}

	pub fn tower(&self) -> &Tower {
		&self.tower
	}

	/// Rotation to give the entity the floors are parented to.
	pub fn root_rotation(&self) -> Quat {
		Quat::from_rotation_y(self.tower.rotation())
	}
}

impl RenderItem for TowerRenderer {
	type Material = StandardMaterial;

	fn spawn_render_items(
		&self,
		commands: &mut Commands,
		parent: Entity,
		meshes: &mut Assets<Mesh>,
		materials: &mut Assets<StandardMaterial>,
	) -> Vec<Entity> {
		let Some(mesh) = self.slab.fetch_mesh(meshes) else {
			log::warn!("No slab mesh available, skipping tower");
			return Vec::new();
		};

		self.tower
			.floors()
			.iter()
			.map(|floor| {
				let material = materials.add(StandardMaterial {
					base_color: floor.color.into(),
					perceptual_roughness: self.roughness,
					metallic: self.metallic,
					..default()
				});

				commands
					.spawn((
						Name::new(format!("Floor {}", floor.index)),
						TowerFloor { index: floor.index },
						Mesh3d(mesh.clone()),
						MeshMaterial3d(material),
						floor.transform(),
						ChildOf(parent),
					))
					.id()
			})
			.collect()
	}
}
