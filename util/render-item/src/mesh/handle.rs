use crate::mesh::{
	cache::handle::{map::HandleMap, MeshHandleCache},
	IdentifiedMesh, MeshBuilder, MeshId,
};
use bevy::prelude::*;

/// Pairs a mesh builder with a handle cache, making it a [`crate::mesh::MeshFetcher`].
#[derive(Debug, Clone)]
pub struct MeshHandle<T: MeshBuilder + IdentifiedMesh> {
	handle_cache: HandleMap,
	builder: T,
}

impl<T: MeshBuilder + IdentifiedMesh> MeshHandle<T> {
	pub fn new(builder: T) -> Self {
		Self { handle_cache: HandleMap::new(), builder }
	}

	pub fn with_handle_cache(mut self, handle_cache: HandleMap) -> Self {
		self.handle_cache = handle_cache;
		self
	}
}

impl<T: MeshBuilder + IdentifiedMesh> IdentifiedMesh for MeshHandle<T> {
	fn id(&self) -> MeshId {
		self.builder.id()
	}
}

impl<T: MeshBuilder + IdentifiedMesh> MeshBuilder for MeshHandle<T> {
	fn build_mesh(&self) -> Option<Mesh> {
		self.builder.build_mesh()
	}
}

impl<T: MeshBuilder + IdentifiedMesh> MeshHandleCache for MeshHandle<T> {
	fn cache_mesh_handle(&self, mesh_handle: Handle<Mesh>) {
		self.handle_cache.insert(&self.builder, mesh_handle);
	}

	fn fetch_cached_mesh_handle(&self) -> Option<Handle<Mesh>> {
		self.handle_cache.get(&self.builder)
	}
}
