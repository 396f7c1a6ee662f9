use crate::error::ParamsError;
use bevy::prelude::*;

/// The tower's parameter record.
///
/// Angles are in degrees and colors in sRGB, matching what the control panel shows.
/// Nothing here is validated: the generator clamps every field at use time.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TowerParams {
	pub floors: u32,
	pub floor_height: f32,
	pub scale_min: f32,
	pub scale_max: f32,
	pub twist_min: f32,
	pub twist_max: f32,
	pub rotation: f32,
	pub color_bottom: Srgba,
	pub color_top: Srgba,
}

impl Default for TowerParams {
	fn default() -> Self {
		Self {
			floors: 32,
			floor_height: 1.8,
			scale_min: 4.0,
			scale_max: 12.0,
			twist_min: -45.0,
			twist_max: 180.0,
			rotation: 0.0,
			// #2680ff
			color_bottom: Srgba::rgb_u8(0x26, 0x80, 0xff),
			// #fca311
			color_top: Srgba::rgb_u8(0xfc, 0xa3, 0x11),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarParam {
	Floors,
	FloorHeight,
	ScaleMin,
	ScaleMax,
	TwistMin,
	TwistMax,
	Rotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorParam {
	Bottom,
	Top,
}

/// Addresses one editable entry of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
	Scalar(ScalarParam),
	Color(ColorParam),
}

impl ScalarParam {
	pub const ALL: [ScalarParam; 7] = [
		ScalarParam::Floors,
		ScalarParam::FloorHeight,
		ScalarParam::ScaleMin,
		ScalarParam::ScaleMax,
		ScalarParam::TwistMin,
		ScalarParam::TwistMax,
		ScalarParam::Rotation,
	];
}

impl TowerParams {
	pub fn scalar(&self, param: ScalarParam) -> f32 {
		match param {
			ScalarParam::Floors => self.floors as f32,
			ScalarParam::FloorHeight => self.floor_height,
			ScalarParam::ScaleMin => self.scale_min,
			ScalarParam::ScaleMax => self.scale_max,
			ScalarParam::TwistMin => self.twist_min,
			ScalarParam::TwistMax => self.twist_max,
			ScalarParam::Rotation => self.rotation,
		}
	}

	pub fn set_scalar(&mut self, param: ScalarParam, value: f32) {
		match param {
			// saturating cast, negative counts become 0 and are clamped by the generator
			ScalarParam::Floors => self.floors = value.round() as u32,
			ScalarParam::FloorHeight => self.floor_height = value,
			ScalarParam::ScaleMin => self.scale_min = value,
			ScalarParam::ScaleMax => self.scale_max = value,
			ScalarParam::TwistMin => self.twist_min = value,
			ScalarParam::TwistMax => self.twist_max = value,
			ScalarParam::Rotation => self.rotation = value,
		}
	}

	pub fn color(&self, param: ColorParam) -> Srgba {
		match param {
			ColorParam::Bottom => self.color_bottom,
			ColorParam::Top => self.color_top,
		}
	}

	pub fn color_mut(&mut self, param: ColorParam) -> &mut Srgba {
		match param {
			ColorParam::Bottom => &mut self.color_bottom,
			ColorParam::Top => &mut self.color_top,
		}
	}
}

/// Parses `#rrggbb`, `rrggbb` or the short `#rgb` forms.
pub fn parse_hex_color(input: &str) -> Result<Srgba, ParamsError> {
	Srgba::hex(input)
		.map_err(|source| ParamsError::InvalidColor { input: input.to_string(), source })
}
