use bevy::color::Srgba;
use clap::Parser;
use tower::{params::parse_hex_color, ScalarParam, TowerParams};

/// Startup overrides for the tower and window. Omitted flags keep their defaults,
/// numeric flags are clamped into the range of their panel slider.
#[derive(Parser, Debug, Clone)]
#[command(name = "tower-playground", about = "Interactive twisted tower generator")]
pub struct Cli {
	#[arg(long)]
	pub floors: Option<u32>,

	#[arg(long)]
	pub floor_height: Option<f32>,

	#[arg(long)]
	pub scale_min: Option<f32>,

	#[arg(long)]
	pub scale_max: Option<f32>,

	/// Degrees.
	#[arg(long, allow_negative_numbers = true)]
	pub twist_min: Option<f32>,

	/// Degrees.
	#[arg(long, allow_negative_numbers = true)]
	pub twist_max: Option<f32>,

	/// Degrees.
	#[arg(long, allow_negative_numbers = true)]
	pub rotation: Option<f32>,

	/// Hex color, e.g. `#2680ff`.
	#[arg(long, value_parser = parse_hex_color)]
	pub color_bottom: Option<Srgba>,

	/// Hex color, e.g. `#fca311`.
	#[arg(long, value_parser = parse_hex_color)]
	pub color_top: Option<Srgba>,

	#[arg(long, default_value_t = 1280)]
	pub width: u32,

	#[arg(long, default_value_t = 720)]
	pub height: u32,
}

impl Cli {
	pub fn tower_params(&self) -> TowerParams {
		let defaults = TowerParams::default();

		let mut params = TowerParams {
			floors: self.floors.unwrap_or(defaults.floors),
			floor_height: self.floor_height.unwrap_or(defaults.floor_height),
			scale_min: self.scale_min.unwrap_or(defaults.scale_min),
			scale_max: self.scale_max.unwrap_or(defaults.scale_max),
			twist_min: self.twist_min.unwrap_or(defaults.twist_min),
			twist_max: self.twist_max.unwrap_or(defaults.twist_max),
			rotation: self.rotation.unwrap_or(defaults.rotation),
			color_bottom: self.color_bottom.unwrap_or(defaults.color_bottom),
			color_top: self.color_top.unwrap_or(defaults.color_top),
		};

		for param in ScalarParam::ALL {
			let range = param.range();
			let value = params.scalar(param);
			if !range.contains(value) {
				let clamped = range.clamp(value);
				log::warn!("{} {} is out of range, using {}", param.label(), value, clamped);
				params.set_scalar(param, clamped);
			}
		}

		params
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_no_flags_keeps_defaults() {
		let cli = Cli::try_parse_from(["tower-playground"]).unwrap();
		assert_eq!(cli.tower_params(), TowerParams::default());
		assert_eq!((cli.width, cli.height), (1280, 720));
	}

	#[test]
	fn test_overrides() {
		let cli = Cli::try_parse_from([
			"tower-playground",
			"--floors",
			"12",
			"--twist-min",
			"-90",
			"--color-top",
			"#ffffff",
		])
		.unwrap();
		let params = cli.tower_params();

		assert_eq!(params.floors, 12);
		assert_eq!(params.twist_min, -90.0);
		assert_eq!(params.color_top, Srgba::WHITE);
		assert_eq!(params.floor_height, TowerParams::default().floor_height);
	}

	#[test]
	fn test_out_of_range_flags_are_clamped() {
		let cli = Cli::try_parse_from([
			"tower-playground",
			"--floors",
			"4294967295",
			"--floor-height",
			"0",
			"--rotation",
			"-720",
			"--scale-max",
			"NaN",
		])
		.unwrap();
		let params = cli.tower_params();

		assert_eq!(params.floors, 80);
		assert_eq!(params.floor_height, 0.8);
		assert_eq!(params.rotation, -180.0);
		assert_eq!(params.scale_max, 1.0);
	}

	#[test]
	fn test_rejects_bad_color() {
		assert!(Cli::try_parse_from(["tower-playground", "--color-bottom", "blue"]).is_err());
	}
}
