mod cli;
mod editor;
mod error;
mod models;
mod prompt;
mod renderer;
mod slug;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "postdraft")]
#[command(about = "Scaffold date-stamped blog post files for a static site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new blog post in _posts/
    New {
        /// Author recorded in the front matter
        #[arg(long, default_value = "Paul Wilson")]
        author: String,

        /// Ask for the author interactively instead of using --author
        #[arg(long)]
        prompt_author: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            author,
            prompt_author,
        } => cli::new::run(author, prompt_author),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
