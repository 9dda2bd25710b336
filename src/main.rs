use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use stepform::config::{Settings, StepformPaths};
use stepform::logging::init_logging;
use stepform::storage::{open_state_store, KeyValueStore, MemoryStore};
use stepform::tui::{run_tui, App};
use stepform::wizard::{restore_step, STEP_KEY};

#[derive(Parser)]
#[command(
    name = "stepform",
    version,
    about = "Three-step registration form in the terminal",
    long_about = "stepform walks you through personal information, location and \
                  business details. Required fields are checked before moving on, \
                  and the current step is remembered between runs."
)]
struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,

    /// Keep the step in memory only; nothing is written to disk
    #[arg(long, global = true, env = "STEPFORM_EPHEMERAL")]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive wizard
    #[command(alias = "ui")]
    Tui,

    /// Show the remembered step
    Status,

    /// Forget the remembered step
    Reset,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = StepformPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let is_tui = matches!(cli.command, None | Some(Commands::Tui));
    let _logging = init_logging(&settings, &paths, is_tui, cli.debug)?;
    debug!(base = %paths.base_dir().display(), "paths resolved");

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            if cli.ephemeral {
                let mut app = App::new(MemoryStore::new(), &settings);
                run_tui(&mut app, &settings)?;
            } else {
                let mut app = App::new(open_state_store(&paths), &settings);
                run_tui(&mut app, &settings)?;
            }
        }
        Commands::Status => {
            let store = open_state_store(&paths);
            println!("{}", restore_step(&store));
        }
        Commands::Reset => {
            let mut store = open_state_store(&paths);
            store.remove(STEP_KEY)?;
            info!("persisted step cleared");
            println!("Form progress cleared. The next run starts at step 1.");
        }
        Commands::Config => {
            println!("stepform Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("State file:      {}", paths.state_file().display());
            println!("Logs directory:  {}", paths.logs_dir().display());
            println!();
            println!("Settings:");
            println!("  Log level:          {}", settings.log_level);
            println!("  Log to file:        {}", settings.log_to_file);
            println!("  Notification (s):   {}", settings.notification_secs);
            println!("  Tick rate (ms):     {}", settings.tick_rate_ms);
        }
    }

    Ok(())
}
