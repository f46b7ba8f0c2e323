//! Command-line interface for webroom.

use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Write a starter room config to a file.
    Save { filename: String },
    /// Run a room loaded from a config file.
    Load { filename: String },
    /// Run the built-in default room.
    Run,
}

pub struct CLI {
    pub command: CliCommand,
}

impl CLI {
    /// Parse command-line arguments.
    ///
    /// Supported commands:
    /// - `./webroom save <filename>` - Write the default room config as a template
    /// - `./webroom load <filename>` - Run a room from a config file
    /// - `./webroom` (no args) - Run the default room
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().collect();

        let command = if args.len() >= 3 {
            match args[1].as_str() {
                "save" => CliCommand::Save {
                    filename: args[2].clone(),
                },
                "load" => CliCommand::Load {
                    filename: args[2].clone(),
                },
                _ => {
                    eprintln!("Unknown command: {}. Running normally.", args[1]);
                    CliCommand::Run
                }
            }
        } else {
            CliCommand::Run
        };

        CLI { command }
    }
}
