use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use codelaunch::commands::{config_cmd::ConfigOptions, launch::LaunchOptions, scan::ScanCmdOptions};
use codelaunch::commands::{execute_config, execute_launch, execute_scan};
use codelaunch::error::AppError;
use codelaunch::model::Toolchain;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => {
            let options = ScanCmdOptions {
                root: args.path,
                search: args.search,
                max_projects: args.max_projects,
                max_depth: args.max_depth,
                json: args.json,
                verbose: args.verbose,
            };
            execute_scan(options)?;
        }
        Commands::Launch(args) => {
            let options = LaunchOptions {
                path: args.path,
                toolchain: args.with,
                search: args.search,
            };
            execute_launch(options)?;
        }
        Commands::Config(args) => {
            let options = ConfigOptions {
                show_path: args.path,
                edit: args.edit,
                set_dir: args.set_dir,
                ignore: args.ignore,
                unignore: args.unignore,
            };
            execute_config(options)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "codelaunch", version, about = "Find IDE projects and launch them from the terminal.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List project roots found under the scan directory.
    Scan(ScanArgs),
    /// Launch an IDE for a project (interactive picker without a path).
    Launch(LaunchArgs),
    /// Manage codelaunch configuration (scan directory, ignored projects).
    Config(ConfigArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Directory to scan (defaults to the configured scan directory).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Only show projects whose label or path contains this text.
    #[arg(short, long, value_name = "QUERY")]
    search: Option<String>,

    /// Stop after this many projects.
    #[arg(long = "max-projects", value_name = "N")]
    max_projects: Option<usize>,

    /// Do not descend past this depth relative to the root.
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Print results as JSON.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Show absolute paths alongside labels.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Args)]
struct LaunchArgs {
    /// Project directory to launch (omit to pick interactively).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Override the detected toolchain (webstorm, goland, rustrover, pycharm, intellij).
    #[arg(long = "with", value_name = "TOOLCHAIN")]
    with: Option<Toolchain>,

    /// Pre-filter the interactive picker.
    #[arg(short, long, value_name = "QUERY")]
    search: Option<String>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Set the directory scanned by default.
    #[arg(long = "set-dir", value_name = "DIR")]
    set_dir: Option<PathBuf>,

    /// Hide a project path from scan output.
    #[arg(long = "ignore", value_name = "PATH")]
    ignore: Option<String>,

    /// Stop hiding a project path.
    #[arg(long = "unignore", value_name = "PATH")]
    unignore: Option<String>,
}
