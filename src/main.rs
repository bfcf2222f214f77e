mod aggregate;
mod categorize;
mod cli;
mod dates;
mod error;
mod fmt;
mod ingest;
mod models;
mod report;
mod rules;
mod session;
mod store;

use clap::Parser;

use cli::{Cli, Commands, RulesCommands};

fn main() {
    let cli = Cli::parse();
    let store = cli.store;

    let result = match cli.command {
        Commands::Import { file } => cli::import::run(&file, &store),
        Commands::Rules { command } => match command {
            RulesCommands::Add { keyword, category } => cli::rules::add(&keyword, &category, &store),
            RulesCommands::List => cli::rules::list(&store),
            RulesCommands::Load { file } => cli::rules::load(&file, &store),
        },
        Commands::Categorize => cli::categorize::run(&store),
        Commands::Report {
            month,
            category,
            all,
        } => cli::report::totals(month, category, all, &store),
        Commands::Period { month, all } => cli::report::period(month, all, &store),
        Commands::List {
            month,
            category,
            all,
        } => cli::list::run(month, category, all, &store),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
