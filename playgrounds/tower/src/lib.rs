use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

pub mod camera;
pub mod config;
pub mod ground;
pub mod scene;
pub mod ui;

pub use camera::OrbitController;
pub use config::Cli;
pub use scene::{ParamsCommitted, RebuildTowerSet, TowerRoot, TowerScenePlugin};

pub use tower;

const BACKGROUND: Srgba = Srgba::rgb(0x0b as f32 / 255.0, 0x0d as f32 / 255.0, 0x12 as f32 / 255.0);
const AMBIENT_TINT: Srgba = Srgba::rgb(0x1d as f32 / 255.0, 0x20 as f32 / 255.0, 0x30 as f32 / 255.0);

/// The tower scene with its camera, lights, ground grid and control panel.
pub struct TowerPlugin {
	/// Parameters of the first build.
	pub params: tower::TowerParams,
}

impl Plugin for TowerPlugin {
	fn build(&self, app: &mut App) {
		app.insert_resource(ClearColor(BACKGROUND.into()))
			.insert_resource(self.params.clone())
			.add_plugins(EguiPlugin::default())
			.add_plugins(TowerScenePlugin)
			.init_resource::<ui::PanelState>()
			.add_systems(Startup, (camera::setup_camera, setup_lighting, ground::setup_ground))
			.add_systems(Update, (camera::orbit_camera, camera::on_window_resized))
			.add_systems(EguiPrimaryContextPass, ui::control_panel);
	}
}

fn setup_lighting(mut commands: Commands) {
	// soft fill, slightly cooled towards the background
	commands.insert_resource(AmbientLight {
		color: Color::WHITE.mix(&AMBIENT_TINT.into(), 0.5),
		brightness: 560.0,
		affects_lightmapped_meshes: true,
	});

	// key light
	commands.spawn((
		Name::new("Sun"),
		DirectionalLight { illuminance: 11_000.0, shadows_enabled: true, ..default() },
		Transform::from_xyz(25.0, 35.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
	));
}
