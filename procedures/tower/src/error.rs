use bevy::color::HexColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
	#[error("invalid hex color `{input}`: {source}")]
	InvalidColor {
		input: String,
		#[source]
		source: HexColorError,
	},
}
