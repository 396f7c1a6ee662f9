use bevy::prelude::*;
use render_item::{mesh::cache::handle::map::HandleMap, render_items, DispatchRenderItem};
use tower::{generate_tower, ParamKey, TowerParams, TowerRenderer};

/// Written when the user finishes editing a parameter. `key` is `None` for the initial build.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ParamsCommitted {
	pub key: Option<ParamKey>,
}

/// The entity floors are parented to. Carries the tower-wide rotation.
#[derive(Component)]
pub struct TowerRoot;

/// Slab meshes shared across rebuilds.
#[derive(Resource, Default, Clone)]
pub struct SlabMeshCache(pub HandleMap);

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RebuildTowerSet;

/// Owns the tower root and rebuilds it whenever parameters are committed.
///
/// Needs `Assets<Mesh>` and `Assets<StandardMaterial>`, which the render plugins provide.
pub struct TowerScenePlugin;

impl Plugin for TowerScenePlugin {
	fn build(&self, app: &mut App) {
		app.init_resource::<TowerParams>()
			.init_resource::<SlabMeshCache>()
			.add_message::<ParamsCommitted>()
			.add_systems(Startup, setup_tower)
			.add_systems(
				Update,
				(rebuild_tower, render_items::<TowerRenderer>).chain().in_set(RebuildTowerSet),
			);
	}
}

pub fn setup_tower(mut commands: Commands, mut committed: MessageWriter<ParamsCommitted>) {
	commands.spawn((Name::new("Tower"), TowerRoot, Transform::default(), Visibility::default()));
	committed.write(ParamsCommitted { key: None });
}

/// Regenerates the tower from the current parameters and dispatches it onto the root.
///
/// The previous floors are released by [`render_items`] when the new dispatch lands.
pub fn rebuild_tower(
	mut commands: Commands,
	mut committed: MessageReader<ParamsCommitted>,
	params: Res<TowerParams>,
	slab_cache: Res<SlabMeshCache>,
	mut roots: Query<(Entity, &mut Transform), With<TowerRoot>>,
) {
	// several commits in one frame collapse into one rebuild
	let Some(commit) = committed.read().last().copied() else {
		return;
	};

	let renderer =
		TowerRenderer::new(generate_tower(&params)).with_handle_cache(slab_cache.0.clone());

	log::info!(
		"Rebuilding tower after {:?}: {} floors, {:.1} tall",
		commit.key,
		renderer.tower().len(),
		renderer.tower().total_height()
	);

	for (root, mut transform) in &mut roots {
		transform.rotation = renderer.root_rotation();
		commands.entity(root).insert(DispatchRenderItem::new(renderer.clone()));
	}
}
