use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::info;
use vmconf::loader::{self, ConfigSource, LoadError};

#[derive(Parser)]
#[command(
    name = "vmconf",
    about = "Read config.toml, apply VM defaults, and print values for shell scripts",
    after_help = "Examples:\n  \
        PROJECT_ID=$(vmconf project.project_id)\n  \
        VM_COUNT=$(vmconf vm | jq length)\n  \
        NAME=$(vmconf vm.0.name)",
    version
)]
struct Cli {
    /// Dot-separated path to look up (e.g. vm.0.name); omit to dump everything as JSON
    path: Option<String>,

    /// Config file to read instead of searching for config.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    completions: Option<clap_complete::Shell>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "vmconf", &mut std::io::stdout());
        return Ok(());
    }

    vmconf::logging::init(cli.verbose)?;

    let (config_path, source) = match &cli.config {
        Some(path) => (loader::expand_path(path), ConfigSource::Explicit),
        None => {
            let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            loader::find_config(loader::program_dir().as_deref(), &work_dir)
        }
    };
    info!(path = %config_path.display(), %source, "using config");

    let mut config = match loader::load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            if let Some(missing) = err.downcast_ref::<LoadError>() {
                eprintln!("error: {missing}");
                std::process::exit(1);
            }
            return Err(err);
        }
    };

    vmconf::defaults::merge_vm_defaults(&mut config);

    match cli.path {
        None => println!("{}", vmconf::render::render_tree(config.table())?),
        Some(path) => {
            let value = vmconf::lookup::resolve(config.table(), &path);
            if value.is_none() {
                info!(%path, "no value at path");
            }
            println!("{}", vmconf::render::render_lookup(value)?);
        }
    }

    Ok(())
}
