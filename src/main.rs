mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    cli::context::init(args.home.as_deref());

    let result = match &args.command {
        Commands::Identity { action } => cli::commands::identity::execute(action, args.verbose),
        Commands::Sign {
            user,
            input,
            output,
        } => cli::commands::sign::execute(user, input, output.as_deref()),
        Commands::Verify { file, reader } => cli::commands::verify::execute(file, reader),
        Commands::Trust { action } => cli::commands::trust::execute(action),
        Commands::Log { author, last } => cli::commands::log::execute(author.as_deref(), *last),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
