pub mod cache;
pub mod handle;

use bevy::prelude::*;
use cache::handle::MeshHandleCache;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeshId(String);

impl MeshId {
	pub fn new(id: String) -> Self {
		Self(id)
	}
}

pub trait IdentifiedMesh {
	fn id(&self) -> MeshId;
}

pub trait MeshBuilder: Clone {
	/// Builds the mesh. Returns `None` if there is nothing to build.
	fn build_mesh(&self) -> Option<Mesh>;
}

pub trait MeshFetcher: Clone + IdentifiedMesh {
	/// Builds mesh if it doesn't exist or fetches from the assets. Returns the handle to the mesh.
	fn fetch_mesh(&self, meshes: &mut Assets<Mesh>) -> Option<Handle<Mesh>>;
}

/// If it's already defined how the mesh is built and cached, this trait can be used to fetch the mesh.
impl<T: MeshBuilder + MeshHandleCache> MeshFetcher for T {
	fn fetch_mesh(&self, meshes: &mut Assets<Mesh>) -> Option<Handle<Mesh>> {
		// Check if the mesh handle is already cached.
		if let Some(mesh) = self.fetch_cached_mesh_handle() {
			return Some(mesh);
		}

		self.build_mesh().map(|mesh| {
			log::info!("Adding mesh {:?} to assets", self.id());
			let handle = meshes.add(mesh);
			self.cache_mesh_handle(handle.clone());
			handle
		})
	}
}
