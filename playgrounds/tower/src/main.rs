use bevy::prelude::*;
use clap::Parser;
use tower_playground::{Cli, TowerPlugin};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let params = cli.tower_params();

	println!(
		"Starting tower playground with {} floors at {}x{}",
		params.floors, cli.width, cli.height
	);

	let exit = App::new()
		.add_plugins(DefaultPlugins.set(WindowPlugin {
			primary_window: Some(Window {
				title: "Twisted Tower".to_string(),
				resolution: (cli.width, cli.height).into(),
				..default()
			}),
			..default()
		}))
		.add_plugins(TowerPlugin { params })
		.run();

	if let AppExit::Error(code) = exit {
		anyhow::bail!("tower playground exited with code {code}");
	}

	Ok(())
}
