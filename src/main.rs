use anyhow::Result;
use clap::Parser;
use scaffold::ProjectType;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Generate a standard folder structure for new projects", long_about = None)]
struct Cli {
    /// Name of the project to create
    project_name: String,

    /// Type of project structure
    #[arg(short = 't', long = "type", value_enum, default_value_t = ProjectType::Standard)]
    project_type: ProjectType,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Keep a partially written project if a write fails
    #[arg(long)]
    keep_partial: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    scaffold::logging::init();

    let exit_code = commands::create::execute(
        &cli.project_name,
        cli.project_type,
        cli.json,
        cli.keep_partial,
    )?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
