use crate::params::TowerParams;
use bevy::{color::Mix, math::FloatExt, prelude::*};

/// Floors are never thinner than this.
pub const MIN_FLOOR_HEIGHT: f32 = 0.1;

/// Floors are never narrower than this.
pub const MIN_RADIUS: f32 = 0.2;

/// The generator's inputs after clamping. Angles are in radians and colors linear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerBounds {
	pub floors: usize,
	pub floor_height: f32,
	pub radius_min: f32,
	pub radius_max: f32,
	pub twist_min: f32,
	pub twist_max: f32,
	pub rotation: f32,
	pub color_bottom: LinearRgba,
	pub color_top: LinearRgba,
}

impl TowerBounds {
	pub fn from_params(params: &TowerParams) -> Self {
		let radius_min = params.scale_min.min(params.scale_max).max(MIN_RADIUS);
		let radius_max = params.scale_max.max(radius_min);

		Self {
			floors: params.floors.max(1) as usize,
			floor_height: params.floor_height.max(MIN_FLOOR_HEIGHT),
			radius_min,
			radius_max,
			twist_min: params.twist_min.to_radians(),
			twist_max: params.twist_max.to_radians(),
			rotation: params.rotation.to_radians(),
			color_bottom: params.color_bottom.into(),
			color_top: params.color_top.into(),
		}
	}

	/// Never zero, so a single floor sits at `t = 0`.
	pub fn denominator(&self) -> f32 {
		self.floors.saturating_sub(1).max(1) as f32
	}

	/// Position of floor `index` along the stack, from 0 at the base to 1 at the top.
	pub fn t(&self, index: usize) -> f32 {
		index as f32 / self.denominator()
	}

	pub fn floor(&self, index: usize) -> FloorDescriptor {
		let t = self.t(index);

		FloorDescriptor {
			index,
			t,
			radius: self.radius_min.lerp(self.radius_max, t),
			height: self.floor_height,
			twist: self.twist_min.lerp(self.twist_max, t),
			elevation: index as f32 * self.floor_height + self.floor_height * 0.5,
			color: self.color_bottom.mix(&self.color_top, t),
		}
	}
}

/// One slab of the tower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorDescriptor {
	pub index: usize,
	pub t: f32,
	pub radius: f32,
	pub height: f32,
	/// Yaw in radians.
	pub twist: f32,
	/// Height of the slab's center above the tower base.
	pub elevation: f32,
	pub color: LinearRgba,
}

impl FloorDescriptor {
	/// Places a unit cylinder (radius 1, height 1, centered on the origin) as this floor.
	pub fn transform(&self) -> Transform {
		Transform::from_xyz(0.0, self.elevation, 0.0)
			.with_rotation(Quat::from_rotation_y(self.twist))
			.with_scale(Vec3::new(self.radius, self.height, self.radius))
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tower {
	floors: Vec<FloorDescriptor>,
	rotation: f32,
}

impl Tower {
	/// Floors ordered from the base up.
	pub fn floors(&self) -> &[FloorDescriptor] {
		&self.floors
	}

	pub fn len(&self) -> usize {
		self.floors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.floors.is_empty()
	}

	/// Yaw of the whole tower, in radians.
	pub fn rotation(&self) -> f32 {
		self.rotation
	}

	/// Height of the top of the uppermost floor.
	pub fn total_height(&self) -> f32 {
		self.floors.last().map(|floor| floor.elevation + floor.height * 0.5).unwrap_or_default()
	}
}

/// Generates the floors of the tower described by `params`.
///
/// The result depends only on `params`, so regenerating from the same record yields an equal tower.
pub fn generate_tower(params: &TowerParams) -> Tower {
	let bounds = TowerBounds::from_params(params);
	let floors: Vec<FloorDescriptor> = (0..bounds.floors).map(|index| bounds.floor(index)).collect();

	log::debug!(
		"Generated tower: {} floors, radius {:.2}..{:.2}, twist {:.1}..{:.1} deg",
		floors.len(),
		bounds.radius_min,
		bounds.radius_max,
		params.twist_min,
		params.twist_max
	);

	Tower { floors, rotation: bounds.rotation }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::params::parse_hex_color;

	fn assert_close(actual: f32, expected: f32) {
		assert!((actual - expected).abs() < 1e-5, "expected {}, got {}", expected, actual);
	}

	#[test]
	fn test_floor_count() {
		for floors in [0, 1, 2, 5, 32, 80] {
			let params = TowerParams { floors, ..default() };
			assert_eq!(generate_tower(&params).len(), floors.max(1) as usize);
		}
	}

	#[test]
	fn test_single_floor_sits_at_t_zero() {
		let params = TowerParams { floors: 1, ..default() };
		let tower = generate_tower(&params);
		let floor = tower.floors()[0];

		assert_eq!(floor.t, 0.0);
		assert_eq!(floor.radius, params.scale_min);
		assert_close(floor.twist, params.twist_min.to_radians());
		assert_eq!(floor.color, LinearRgba::from(params.color_bottom));
	}

	#[test]
	fn test_floors_stack_by_height() {
		let params = TowerParams { floors: 10, floor_height: 2.5, ..default() };
		let tower = generate_tower(&params);

		assert_close(tower.floors()[0].elevation, 1.25);
		for pair in tower.floors().windows(2) {
			assert_close(pair[1].elevation - pair[0].elevation, 2.5);
		}
		assert_close(tower.total_height(), 25.0);
	}

	#[test]
	fn test_worked_example() {
		let params = TowerParams {
			floors: 3,
			floor_height: 2.0,
			scale_min: 4.0,
			scale_max: 12.0,
			twist_min: 0.0,
			twist_max: 180.0,
			..default()
		};
		let tower = generate_tower(&params);
		let expected = [(0.0, 4.0, 0.0, 1.0), (0.5, 8.0, 90.0, 3.0), (1.0, 12.0, 180.0, 5.0)];

		assert_eq!(tower.len(), 3);
		for (floor, (t, radius, twist_degrees, y)) in tower.floors().iter().zip(expected) {
			assert_close(floor.t, t);
			assert_close(floor.radius, radius);
			assert_close(floor.twist, f32::to_radians(twist_degrees));
			assert_close(floor.elevation, y);
		}
	}

	#[test]
	fn test_colors_hit_endpoints_exactly() {
		let params = TowerParams {
			floors: 2,
			color_bottom: parse_hex_color("#2680ff").unwrap(),
			color_top: parse_hex_color("#fca311").unwrap(),
			..default()
		};
		let tower = generate_tower(&params);

		assert_eq!(tower.floors()[0].color, LinearRgba::from(params.color_bottom));
		assert_eq!(tower.floors()[1].color, LinearRgba::from(params.color_top));
	}

	#[test]
	fn test_inverted_radius_bounds_are_normalized() {
		let params = TowerParams { scale_min: 15.0, scale_max: 3.0, ..default() };
		let bounds = TowerBounds::from_params(&params);
		assert!(bounds.radius_min <= bounds.radius_max);

		let tower = generate_tower(&params);
		for pair in tower.floors().windows(2) {
			assert!(pair[0].radius <= pair[1].radius);
		}
	}

	#[test]
	fn test_degenerate_inputs_are_clamped() {
		let params =
			TowerParams { floor_height: -1.0, scale_min: 0.0, scale_max: 0.05, ..default() };
		let bounds = TowerBounds::from_params(&params);

		assert_eq!(bounds.floor_height, MIN_FLOOR_HEIGHT);
		assert_eq!(bounds.radius_min, MIN_RADIUS);
		assert_eq!(bounds.radius_max, MIN_RADIUS);
	}

	#[test]
	fn test_rotation_is_radians() {
		let params = TowerParams { rotation: -90.0, ..default() };
		assert_close(generate_tower(&params).rotation(), -std::f32::consts::FRAC_PI_2);
	}

	#[test]
	fn test_regeneration_is_deterministic() {
		let params = TowerParams::default();
		assert_eq!(generate_tower(&params), generate_tower(&params));
	}

	#[test]
	fn test_floor_transform() {
		let params = TowerParams { floors: 3, twist_min: 0.0, twist_max: 180.0, ..default() };
		let floor = generate_tower(&params).floors()[1];
		let transform = floor.transform();

		assert_close(transform.translation.y, floor.elevation);
		assert_eq!(transform.scale, Vec3::new(floor.radius, floor.height, floor.radius));
		assert!(transform.rotation.abs_diff_eq(Quat::from_rotation_y(floor.twist), 1e-6));
	}
}
