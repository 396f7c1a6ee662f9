pub mod controls;
pub mod error;
pub mod generator;
pub mod params;
pub mod render;

pub use error::ParamsError;
pub use generator::{generate_tower, FloorDescriptor, Tower};
pub use params::{ColorParam, ParamKey, ScalarParam, TowerParams};
pub use render::{TowerFloor, TowerRenderer};
