//! CLI Adapter.

mod logging;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;

use crate::app::api::{self, PlanTarget, RenderOptions, RenderOutcome};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "entrykit")]
#[command(version)]
#[command(
    about = "Prepare an app or gateway container, then hand off to its server",
    long_about = None
)]
struct Cli {
    /// Path to entrykit.toml (defaults are built in)
    #[arg(short, long, global = true, env = "ENTRYKIT_CONFIG")]
    config: Option<PathBuf>,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wait for the database, collect static files, migrate, then serve
    #[clap(visible_alias = "a")]
    App,
    /// Render the nginx configuration, then run nginx in the foreground
    #[clap(visible_alias = "g")]
    Gateway,
    /// Substitute environment variables into a template
    #[clap(visible_alias = "r")]
    Render {
        /// Template file containing ${VAR} or $VAR placeholders
        #[arg(short, long)]
        template: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Substitute only these variables
        #[arg(long = "only", value_name = "VAR", value_delimiter = ',')]
        only: Vec<String>,
    },
    /// Show the steps a bootstrapper would run
    #[clap(visible_alias = "p")]
    Plan {
        target: Target,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a default entrykit.toml and nginx template
    Scaffold {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    App,
    Gateway,
}

impl From<Target> for PlanTarget {
    fn from(value: Target) -> Self {
        match value {
            Target::App => PlanTarget::App,
            Target::Gateway => PlanTarget::Gateway,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::App => api::boot_app(config),
        Commands::Gateway => api::boot_gateway(config),
        Commands::Render { template, output, only } => {
            run_render(RenderOptions { template, output, variables: only })
        }
        Commands::Plan { target, json } => run_plan(config, target.into(), json),
        Commands::Scaffold { dir, force } => run_scaffold(dir, force),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_render(options: RenderOptions) -> Result<(), AppError> {
    match api::render(&options)? {
        RenderOutcome::Rendered(bytes) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
        RenderOutcome::Written { path } => {
            println!("✅ Rendered {} to {}", options.template.display(), path.display())
        }
    }
    Ok(())
}

fn run_plan(
    config: Option<&std::path::Path>,
    target: PlanTarget,
    json: bool,
) -> Result<(), AppError> {
    let plan = api::plan(config, target)?;
    if json {
        println!("{}", plan.to_json()?);
    } else {
        print!("{}", plan);
    }
    Ok(())
}

fn run_scaffold(dir: PathBuf, force: bool) -> Result<(), AppError> {
    for path in api::scaffold(&dir, force)? {
        println!("✅ Created {}", path.display());
    }
    Ok(())
}
