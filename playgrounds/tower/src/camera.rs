use bevy::{
	input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
	prelude::*,
	window::WindowResized,
};
use std::f32::consts::FRAC_PI_2;

use crate::ui::PanelState;

const MIN_RADIUS: f32 = 2.0;
const MAX_RADIUS: f32 = 500.0;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;

/// Orbits the camera around a target point.
///
/// Input is accumulated into pending deltas. Each frame [`OrbitController::advance`] applies
/// `damping` of what is pending and keeps the rest, so the camera eases out after the pointer stops.
#[derive(Component, Debug, Clone)]
pub struct OrbitController {
	pub target: Vec3,
	pub radius: f32,
	pub yaw: f32,
	pub pitch: f32,
	pub damping: f32,
	pub rotate_sensitivity: f32,
	pub zoom_sensitivity: f32,
	pub pan_sensitivity: f32,
	pending_yaw: f32,
	pending_pitch: f32,
	pending_zoom: f32,
	pending_pan: Vec3,
}

impl OrbitController {
	pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
		let offset = eye - target;
		let radius = offset.length().clamp(MIN_RADIUS, MAX_RADIUS);
		let yaw = offset.x.atan2(offset.z);
		let pitch = (offset.y / offset.length().max(f32::EPSILON)).clamp(-1.0, 1.0).asin();

		Self {
			target,
			radius,
			yaw,
			pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
			damping: 0.06,
			rotate_sensitivity: 0.005,
			zoom_sensitivity: 0.1,
			pan_sensitivity: 0.0015,
			pending_yaw: 0.0,
			pending_pitch: 0.0,
			pending_zoom: 0.0,
			pending_pan: Vec3::ZERO,
		}
	}

	/// Dragging right swings the camera left around the target, dragging down raises it.
	pub fn rotate(&mut self, pointer_delta: Vec2) {
		self.pending_yaw -= pointer_delta.x * self.rotate_sensitivity;
		self.pending_pitch += pointer_delta.y * self.rotate_sensitivity;
	}

	/// Positive scroll moves towards the target.
	pub fn zoom(&mut self, scroll: f32) {
		self.pending_zoom -= scroll * self.zoom_sensitivity;
	}

	/// Slides the target in the camera's view plane.
	pub fn pan(&mut self, pointer_delta: Vec2, right: Vec3, up: Vec3) {
		let scale = self.pan_sensitivity * self.radius;
		self.pending_pan += (-right * pointer_delta.x + up * pointer_delta.y) * scale;
	}

	pub fn advance(&mut self) {
		let keep = 1.0 - self.damping;

		self.yaw += self.pending_yaw * self.damping;
		self.pitch =
			(self.pitch + self.pending_pitch * self.damping).clamp(-PITCH_LIMIT, PITCH_LIMIT);
		self.radius =
			(self.radius * (self.pending_zoom * self.damping).exp()).clamp(MIN_RADIUS, MAX_RADIUS);
		self.target += self.pending_pan * self.damping;

		self.pending_yaw *= keep;
		self.pending_pitch *= keep;
		self.pending_zoom *= keep;
		self.pending_pan *= keep;
	}

	pub fn is_settled(&self) -> bool {
		self.pending_yaw.abs() < 1e-5
			&& self.pending_pitch.abs() < 1e-5
			&& self.pending_zoom.abs() < 1e-5
			&& self.pending_pan.length_squared() < 1e-10
	}

	pub fn eye(&self) -> Vec3 {
		let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
		let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
		self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.radius
	}

	pub fn transform(&self) -> Transform {
		Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
	}
}

pub fn setup_camera(mut commands: Commands) {
	let controller = OrbitController::looking_from(Vec3::new(0.0, 25.0, 55.0), Vec3::ZERO);

	log::info!(
		"Setting up camera at position: {:?}, looking at: {:?}",
		controller.eye(),
		controller.target
	);

	commands.spawn((
		Camera3d::default(),
		controller.transform(),
		Projection::Perspective(PerspectiveProjection {
			fov: 60.0_f32.to_radians(),
			near: 0.1,
			far: 1000.0,
			..default()
		}),
		controller,
	));
}

/// Feeds pointer input into the orbit controller and advances its damping, once per frame.
///
/// Pointer input is ignored while the control panel holds the pointer.
pub fn orbit_camera(
	mouse_buttons: Res<ButtonInput<MouseButton>>,
	mut mouse_motion: MessageReader<MouseMotion>,
	mut mouse_wheel: MessageReader<MouseWheel>,
	panel: Res<PanelState>,
	mut query: Query<(&mut Transform, &mut OrbitController)>,
) {
	let Ok((mut transform, mut controller)) = query.single_mut() else {
		return;
	};

	let mut pointer_delta = Vec2::ZERO;
	for motion in mouse_motion.read() {
		pointer_delta += motion.delta;
	}

	let mut scroll = 0.0;
	for wheel in mouse_wheel.read() {
		scroll += match wheel.unit {
			MouseScrollUnit::Line => wheel.y,
			MouseScrollUnit::Pixel => wheel.y / 100.0,
		};
	}

	if !panel.pointer_captured {
		if mouse_buttons.pressed(MouseButton::Left) {
			controller.rotate(pointer_delta);
		} else if mouse_buttons.pressed(MouseButton::Right) {
			let (right, up) = (transform.right(), transform.up());
			controller.pan(pointer_delta, *right, *up);
		}
		if scroll != 0.0 {
			controller.zoom(scroll);
		}
	}

	controller.advance();
	*transform = controller.transform();
}

/// Width over height, or `None` for a collapsed window.
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
	(width > 0.0 && height > 0.0).then(|| width / height)
}

/// Bevy's camera system already follows window resizes; this only skips collapsed windows,
/// which would otherwise produce an infinite or NaN aspect ratio.
pub fn on_window_resized(
	mut resized: MessageReader<WindowResized>,
	mut projections: Query<&mut Projection, With<OrbitController>>,
) {
	let Some(resize) = resized.read().last() else {
		return;
	};

	let Some(aspect) = aspect_ratio(resize.width, resize.height) else {
		log::debug!("Ignoring resize to {}x{}", resize.width, resize.height);
		return;
	};

	log::debug!("Window resized to {}x{}", resize.width, resize.height);

	for mut projection in &mut projections {
		if let Projection::Perspective(perspective) = &mut *projection {
			perspective.aspect_ratio = aspect;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_looking_from_round_trips_eye() {
		let eye = Vec3::new(0.0, 25.0, 55.0);
		let controller = OrbitController::looking_from(eye, Vec3::ZERO);
		assert!(controller.eye().abs_diff_eq(eye, 1e-3));
		assert_eq!(controller.yaw, 0.0);
	}

	#[test]
	fn test_damping_converges_to_input() {
		let mut controller = OrbitController::looking_from(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
		controller.rotate(Vec2::new(-100.0, 0.0));
		let expected_yaw = 100.0 * controller.rotate_sensitivity;

		controller.advance();
		assert!((controller.yaw - expected_yaw * controller.damping).abs() < 1e-6);

		for _ in 0..400 {
			controller.advance();
		}
		assert!(controller.is_settled());
		assert!((controller.yaw - expected_yaw).abs() < 1e-4);
	}

	#[test]
	fn test_pitch_and_radius_are_clamped() {
		let mut controller = OrbitController::looking_from(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
		controller.rotate(Vec2::new(0.0, 1.0e6));
		controller.zoom(1.0e4);
		for _ in 0..50 {
			controller.advance();
		}

		assert!(controller.pitch <= PITCH_LIMIT);
		assert_eq!(controller.radius, MIN_RADIUS);
	}

	#[test]
	fn test_pan_moves_target() {
		let mut controller = OrbitController::looking_from(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
		controller.pan(Vec2::new(10.0, 0.0), Vec3::X, Vec3::Y);
		for _ in 0..400 {
			controller.advance();
		}

		assert!(controller.target.x < 0.0);
		assert!(controller.target.y.abs() < 1e-6);
	}

	fn orbit_app(pointer_captured: bool) -> App {
		let mut app = App::new();
		app.add_plugins(MinimalPlugins)
			.init_resource::<ButtonInput<MouseButton>>()
			.insert_resource(PanelState { pointer_captured, ..default() })
			.add_message::<MouseMotion>()
			.add_message::<MouseWheel>()
			.add_systems(Update, orbit_camera);
		app.world_mut().spawn((
			Transform::default(),
			OrbitController::looking_from(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO),
		));
		app
	}

	fn drag_left(app: &mut App) -> f32 {
		app.world_mut().resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Left);
		app.world_mut().write_message(MouseMotion { delta: Vec2::new(-100.0, 0.0) });
		app.update();

		let mut controllers = app.world_mut().query::<&OrbitController>();
		controllers.iter(app.world()).map(|controller| controller.yaw).sum()
	}

	#[test]
	fn test_drag_orbits_camera() {
		let mut app = orbit_app(false);
		assert!(drag_left(&mut app) > 0.0);
	}

	#[test]
	fn test_drag_over_panel_is_ignored() {
		let mut app = orbit_app(true);
		assert_eq!(drag_left(&mut app), 0.0);
	}

	#[test]
	fn test_aspect_ratio() {
		assert_eq!(aspect_ratio(1280.0, 720.0), Some(1280.0 / 720.0));
		assert_eq!(aspect_ratio(1280.0, 0.0), None);
		assert_eq!(aspect_ratio(0.0, 720.0), None);
	}
}
