use bevy::{asset::RenderAssetUsages, mesh::PrimitiveTopology, prelude::*};

/// Reference grid on the ground plane.
#[derive(Debug, Clone)]
pub struct GroundGrid {
	/// Edge length of the square grid.
	pub size: f32,
	/// Cells along each edge.
	pub divisions: u32,
	pub center_color: Srgba,
	pub line_color: Srgba,
}

impl Default for GroundGrid {
	fn default() -> Self {
		Self {
			size: 120.0,
			divisions: 30,
			center_color: Srgba::rgb_u8(0x2c, 0x2f, 0x38),
			line_color: Srgba::rgb_u8(0x13, 0x15, 0x1b),
		}
	}
}

impl GroundGrid {
	/// Line list on the XZ plane, one line per division along each axis, vertex colored.
	pub fn mesh(&self) -> Mesh {
		let half = self.size / 2.0;
		let step = self.size / self.divisions.max(1) as f32;
		let center = self.divisions / 2;
		let center_color = LinearRgba::from(self.center_color).to_f32_array();
		let line_color = LinearRgba::from(self.line_color).to_f32_array();

		let mut positions = Vec::new();
		let mut colors = Vec::new();

		for i in 0..=self.divisions {
			let k = -half + i as f32 * step;
			let color = if i == center { center_color } else { line_color };

			positions.extend([[-half, 0.0, k], [half, 0.0, k], [k, 0.0, -half], [k, 0.0, half]]);
			colors.extend([color; 4]);
		}

		Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD)
			.with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
			.with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
	}
}

pub fn setup_ground(
	mut commands: Commands,
	mut meshes: ResMut<Assets<Mesh>>,
	mut materials: ResMut<Assets<StandardMaterial>>,
) {
	let grid = GroundGrid::default();
	log::info!("Setting up {}x{} ground grid, {} wide", grid.divisions, grid.divisions, grid.size);

	let material = materials.add(StandardMaterial {
		base_color: Color::WHITE,
		unlit: true,
		..default()
	});

	commands.spawn((
		Name::new("Ground"),
		Mesh3d(meshes.add(grid.mesh())),
		MeshMaterial3d(material),
		Transform::default(),
	));
}
