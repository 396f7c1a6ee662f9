use crate::scene::ParamsCommitted;
use bevy::{color::ColorToPacked, prelude::*};
use bevy_egui::{egui, EguiContexts};
use tower::{
	controls::{Control, CONTROL_SECTIONS},
	ColorParam, ParamKey, ScalarParam, TowerParams,
};

const PANEL_WIDTH: f32 = 300.0;

#[derive(Resource, Debug, Default)]
pub struct PanelState {
	pub collapsed: bool,
	/// Set while the pointer is over the panel or dragging one of its widgets.
	pub pointer_captured: bool,
	/// Entries edited since the pointer was last released.
	pub(crate) pending: Vec<ParamKey>,
}

impl PanelState {
	pub fn mark_edited(&mut self, key: ParamKey) {
		if !self.pending.contains(&key) {
			self.pending.push(key);
		}
	}

	/// Hands out the pending edits once no pointer button is held.
	pub fn take_commits(&mut self, pointer_down: bool) -> Vec<ParamKey> {
		if pointer_down {
			return Vec::new();
		}
		std::mem::take(&mut self.pending)
	}
}

pub fn chevron(collapsed: bool) -> &'static str {
	if collapsed {
		"+"
	} else {
		"-"
	}
}

/// Title row with the collapse toggle. Returns the toggle's response.
pub fn panel_header(ui: &mut egui::Ui, state: &mut PanelState) -> egui::Response {
	ui.horizontal(|ui| {
		ui.heading("Tower Controls");
		ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
			let toggle = ui.small_button(chevron(state.collapsed));
			if toggle.clicked() {
				state.collapsed = !state.collapsed;
				log::debug!("Control panel collapsed: {}", state.collapsed);
			}
			toggle
		})
		.inner
	})
	.inner
}

fn scalar_slider(ui: &mut egui::Ui, params: &mut TowerParams, param: ScalarParam) -> egui::Response {
	let range = param.range();

	ui.horizontal(|ui| {
		ui.label(param.label());
		ui.add(
			egui::Slider::from_get_set(range.inclusive(), |value| {
				if let Some(value) = value {
					params.set_scalar(param, value as f32);
				}
				params.scalar(param) as f64
			})
			.step_by(range.step as f64)
			.fixed_decimals(range.decimals()),
		)
	})
	.inner
}

fn color_picker(ui: &mut egui::Ui, params: &mut TowerParams, param: ColorParam) -> egui::Response {
	let color = params.color_mut(param);
	let mut rgb = color.to_u8_array_no_alpha();

	ui.horizontal(|ui| {
		ui.label(param.label());
		let response = ui.color_edit_button_srgb(&mut rgb);
		if response.changed() {
			*color = Srgba::from_u8_array_no_alpha(rgb);
		}
		ui.monospace(color.to_hex());
		response
	})
	.inner
}

/// Draws one control and records it as edited if its value changed this pass.
pub fn edit_control(
	ui: &mut egui::Ui,
	state: &mut PanelState,
	params: &mut TowerParams,
	control: Control,
) -> egui::Response {
	let response = match control {
		Control::Slider(param) => scalar_slider(ui, params, param),
		Control::Color(param) => color_picker(ui, params, param),
	};
	if response.changed() {
		state.mark_edited(control.key());
	}
	response
}

/// Records whether egui owns the pointer and returns the edits to commit this pass.
pub fn finish_pass(ctx: &egui::Context, state: &mut PanelState) -> Vec<ParamKey> {
	state.pointer_captured = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
	state.take_commits(ctx.input(|input| input.pointer.any_down()))
}

/// The whole panel for one egui pass. Values follow the widgets live, commits wait for release.
pub fn draw_control_panel(
	ctx: &egui::Context,
	state: &mut PanelState,
	params: &mut TowerParams,
) -> Vec<ParamKey> {
	egui::Window::new("Tower Controls")
		.title_bar(false)
		.resizable(false)
		.anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
		.default_width(PANEL_WIDTH)
		.show(ctx, |ui| {
			panel_header(ui, state);
			if state.collapsed {
				return;
			}

			for section in CONTROL_SECTIONS {
				ui.separator();
				for control in section.iter() {
					edit_control(ui, state, params, *control);
				}
			}
		});

	finish_pass(ctx, state)
}

pub fn control_panel(
	mut contexts: EguiContexts,
	mut state: ResMut<PanelState>,
	mut params: ResMut<TowerParams>,
	mut committed: MessageWriter<ParamsCommitted>,
) -> Result {
	let ctx = contexts.ctx_mut()?;

	for key in draw_control_panel(ctx, &mut state, &mut params) {
		log::debug!("Committing {:?}", key);
		committed.write(ParamsCommitted { key: Some(key) });
	}

	Ok(())
}
