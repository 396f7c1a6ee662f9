use crate::mesh::{IdentifiedMesh, MeshId};
use bevy::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Shared map from mesh identity to the handle of the built mesh.
///
/// Clones share the same underlying map, so every builder holding a clone sees the same meshes.
#[derive(Debug, Clone, Default)]
pub struct HandleMap {
	cache: Arc<RwLock<HashMap<MeshId, Handle<Mesh>>>>,
}

impl HandleMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get<T: IdentifiedMesh>(&self, mesh_builder: &T) -> Option<Handle<Mesh>> {
		let cache = self.cache.read().ok()?;
		cache.get(&mesh_builder.id()).cloned()
	}

	pub fn insert<T: IdentifiedMesh>(&self, mesh_builder: &T, mesh: Handle<Mesh>) {
		match self.cache.write() {
			Ok(mut cache) => {
				cache.insert(mesh_builder.id(), mesh);
			}
			Err(_) => log::warn!("Mesh handle cache is poisoned, not caching {:?}", mesh_builder.id()),
		}
	}

	pub fn len(&self) -> usize {
		self.cache.read().map(|cache| cache.len()).unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
