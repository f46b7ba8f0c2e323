mod engine;

use engine::cli::{CLI, CliCommand};
use engine::config::RoomConfig;
use engine::room::Room;
use engine::scene::SceneModel;
use engine::user_input::UserInput;

fn main() {
    env_logger::init();

    let cli = CLI::parse();
    let config = match cli.command {
        CliCommand::Save { filename } => {
            // Write a starter room config as a template for hand-tweaking.
            match RoomConfig::default().save(&filename) {
                Ok(()) => log::info!("wrote starter room config to '{filename}'"),
                Err(e) => {
                    log::error!("{e}");
                    std::process::exit(1);
                }
            }
            return;
        }
        CliCommand::Load { filename } => match RoomConfig::load(&filename) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        CliCommand::Run => RoomConfig::default(),
    };

    let room = Room::new(config);
    let scene = SceneModel::new();
    let user_input = UserInput::new();

    engine::Windowing::run_app(room, scene, user_input).expect("Windowing failed");
}
