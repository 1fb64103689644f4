//! klang - procedural modal synthesis from the command line.

mod commands;
mod scene;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "klang")]
#[command(author, version, about = "Modal synthesis renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a struck glass sphere
    Sphere(commands::sphere::SphereArgs),

    /// Render a struck rectangular plate
    Plate(commands::plate::PlateArgs),

    /// Render a declarative scene file
    Scene(commands::scene::SceneArgs),

    /// Render the built-in showcase scene
    Demo(commands::demo::DemoArgs),

    /// List audio output devices
    Devices,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sphere(args) => commands::sphere::run(args),
        Commands::Plate(args) => commands::plate::run(args),
        Commands::Scene(args) => commands::scene::run(args),
        Commands::Demo(args) => commands::demo::run(args),
        Commands::Devices => commands::devices::run(),
    }
}
