pub mod mesh;

use bevy::prelude::*;

/// Used for logical items that will spawn their constituents into the world.
///
/// Constituents are spawned as children of `parent` so that the parent's transform
/// applies to the item as a whole.
pub trait RenderItem: Clone + Send + Sync + 'static {
	type Material: Material;

	fn spawn_render_items(
		&self,
		commands: &mut Commands,
		parent: Entity,
		meshes: &mut Assets<Mesh>,
		materials: &mut Assets<Self::Material>,
	) -> Vec<Entity>;
}

#[derive(Component)]
pub struct DispatchRenderItem<T: RenderItem> {
	item: T,
}

/// Spawns the render item to the world.
impl<T: RenderItem> DispatchRenderItem<T> {
	pub fn new(item: T) -> Self {
		Self { item }
	}

	pub fn spawn_render_items(
		&self,
		commands: &mut Commands,
		parent: Entity,
		meshes: &mut Assets<Mesh>,
		materials: &mut Assets<T::Material>,
	) -> Vec<Entity> {
		self.item.spawn_render_items(commands, parent, meshes, materials)
	}
}

/// The entities spawned for whatever render item was last dispatched on this entity.
#[derive(Component, Debug, Default)]
pub struct RenderedItems {
	entities: Vec<Entity>,
}

impl RenderedItems {
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}
}

/// Despawns previously rendered entities and removes their materials from the assets.
///
/// Meshes are left alone: they are shared through the handle cache and are not owned by any one item.
pub fn release_render_items<M: Material>(
	commands: &mut Commands,
	rendered: &mut RenderedItems,
	spawned: &Query<&MeshMaterial3d<M>>,
	materials: &mut Assets<M>,
) -> usize {
	let released = rendered.entities.len();

	for entity in rendered.entities.drain(..) {
		if let Ok(material) = spawned.get(entity) {
			materials.remove(&material.0);
		}
		commands.entity(entity).despawn();
	}

	released
}

/// Handles dispatched render items.
///
/// Whenever a [`DispatchRenderItem`] is added or replaced, the entities spawned for the previous
/// dispatch are released before the new item is spawned, so an entity never carries more than one
/// generation of constituents.
pub fn render_items<T: RenderItem>(
	mut commands: Commands,
	mut meshes: ResMut<Assets<Mesh>>,
	mut materials: ResMut<Assets<T::Material>>,
	mut dispatched: Query<
		(Entity, &DispatchRenderItem<T>, Option<&mut RenderedItems>),
		Changed<DispatchRenderItem<T>>,
	>,
	spawned: Query<&MeshMaterial3d<T::Material>>,
) {
	for (parent, dispatch, rendered) in &mut dispatched {
		match rendered {
			Some(mut rendered) => {
				if !rendered.is_empty() {
					let released =
						release_render_items(&mut commands, &mut rendered, &spawned, &mut materials);
					log::debug!("Released {} render items before respawn", released);
				}
				rendered.entities =
					dispatch.spawn_render_items(&mut commands, parent, &mut meshes, &mut materials);
			}
			None => {
				let entities =
					dispatch.spawn_render_items(&mut commands, parent, &mut meshes, &mut materials);
				commands.entity(parent).insert(RenderedItems { entities });
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Clone)]
	struct Slabs {
		count: usize,
	}

	impl RenderItem for Slabs {
		type Material = StandardMaterial;

		fn spawn_render_items(
			&self,
			commands: &mut Commands,
			parent: Entity,
			meshes: &mut Assets<Mesh>,
			materials: &mut Assets<StandardMaterial>,
		) -> Vec<Entity> {
			let mesh = meshes.add(Cuboid::default());
			(0..self.count)
				.map(|_| {
					commands
						.spawn((
							Mesh3d(mesh.clone()),
							MeshMaterial3d(materials.add(StandardMaterial::default())),
							ChildOf(parent),
						))
						.id()
				})
				.collect()
		}
	}

	fn app() -> App {
		let mut app = App::new();
		app.add_plugins(MinimalPlugins)
			.init_resource::<Assets<Mesh>>()
			.init_resource::<Assets<StandardMaterial>>()
			.add_systems(Update, render_items::<Slabs>);
		app
	}

	fn live_slabs(app: &mut App) -> usize {
		let mut query = app.world_mut().query_filtered::<Entity, With<Mesh3d>>();
		query.iter(app.world()).count()
	}

	#[test]
	fn test_dispatch_spawns_items() {
		let mut app = app();
		let parent = app.world_mut().spawn(DispatchRenderItem::new(Slabs { count: 3 })).id();
		app.update();

		assert_eq!(live_slabs(&mut app), 3);
		let rendered = app.world().get::<RenderedItems>(parent).unwrap();
		assert_eq!(rendered.len(), 3);
		assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 3);
	}

	#[test]
	fn test_redispatch_releases_previous_items() {
		let mut app = app();
		let parent = app.world_mut().spawn(DispatchRenderItem::new(Slabs { count: 5 })).id();
		app.update();

		app.world_mut().entity_mut(parent).insert(DispatchRenderItem::new(Slabs { count: 2 }));
		app.update();

		assert_eq!(live_slabs(&mut app), 2);
		assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 2);
		assert_eq!(app.world().get::<RenderedItems>(parent).unwrap().len(), 2);
	}

	#[test]
	fn test_unchanged_dispatch_is_not_respawned() {
		let mut app = app();
		app.world_mut().spawn(DispatchRenderItem::new(Slabs { count: 4 }));
		app.update();
		app.update();

		assert_eq!(live_slabs(&mut app), 4);
	}
}
