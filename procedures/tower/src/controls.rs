//! Declarative description of the control panel: which parameter each control edits,
//! its label, and the range and step its slider covers.

use crate::params::{ColorParam, ParamKey, ScalarParam};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
	pub min: f32,
	pub max: f32,
	pub step: f32,
}

impl SliderRange {
	pub const fn new(min: f32, max: f32, step: f32) -> Self {
		Self { min, max, step }
	}

	/// Clamps into the range. NaN lands on `min`.
	pub fn clamp(&self, value: f32) -> f32 {
		if value.is_nan() {
			return self.min;
		}
		value.clamp(self.min, self.max)
	}

	pub fn contains(&self, value: f32) -> bool {
		(self.min..=self.max).contains(&value)
	}

	pub fn inclusive(&self) -> RangeInclusive<f64> {
		self.min as f64..=self.max as f64
	}

	/// Number of decimals needed to show a value on this range's step grid.
	pub fn decimals(&self) -> usize {
		if self.step.fract() == 0.0 {
			0
		} else {
			1
		}
	}
}

impl ScalarParam {
	pub fn label(&self) -> &'static str {
		match self {
			ScalarParam::Floors => "Floor Count",
			ScalarParam::FloorHeight => "Floor Height",
			ScalarParam::ScaleMin => "Scale Min",
			ScalarParam::ScaleMax => "Scale Max",
			ScalarParam::TwistMin => "Twist Min",
			ScalarParam::TwistMax => "Twist Max",
			ScalarParam::Rotation => "Tower Rotation",
		}
	}

	pub fn range(&self) -> SliderRange {
		match self {
			ScalarParam::Floors => SliderRange::new(5.0, 80.0, 1.0),
			ScalarParam::FloorHeight => SliderRange::new(0.8, 4.0, 0.1),
			ScalarParam::ScaleMin => SliderRange::new(1.0, 15.0, 0.1),
			ScalarParam::ScaleMax => SliderRange::new(1.0, 20.0, 0.1),
			ScalarParam::TwistMin => SliderRange::new(-180.0, 0.0, 1.0),
			ScalarParam::TwistMax => SliderRange::new(0.0, 360.0, 1.0),
			ScalarParam::Rotation => SliderRange::new(-180.0, 180.0, 1.0),
		}
	}
}

impl ColorParam {
	pub fn label(&self) -> &'static str {
		match self {
			ColorParam::Bottom => "Color Bottom",
			ColorParam::Top => "Color Top",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
	Slider(ScalarParam),
	Color(ColorParam),
}

impl Control {
	pub fn label(&self) -> &'static str {
		match self {
			Control::Slider(param) => param.label(),
			Control::Color(param) => param.label(),
		}
	}

	/// The record entry this control edits.
	pub fn key(&self) -> ParamKey {
		match *self {
			Control::Slider(param) => ParamKey::Scalar(param),
			Control::Color(param) => ParamKey::Color(param),
		}
	}
}

/// The panel's controls, in display order. Sections are drawn with a separator between them.
pub const CONTROL_SECTIONS: &[&[Control]] = &[
	&[Control::Slider(ScalarParam::Floors), Control::Slider(ScalarParam::FloorHeight)],
	&[Control::Slider(ScalarParam::ScaleMin), Control::Slider(ScalarParam::ScaleMax)],
	&[
		Control::Slider(ScalarParam::TwistMin),
		Control::Slider(ScalarParam::TwistMax),
		Control::Slider(ScalarParam::Rotation),
	],
	&[Control::Color(ColorParam::Bottom), Control::Color(ColorParam::Top)],
];
