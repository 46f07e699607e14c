use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};

use rangebar::cli::{
    handle_account_command, handle_allowance_command, handle_overview_command,
    handle_standard_command, AccountArgs, AllowanceArgs, OverviewArgs, StandardArgs,
};
use rangebar::config::{RangebarPaths, Settings};
use rangebar::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "rangebar",
    version,
    about = "Balance range bars for budgeting accounts",
    long_about = "rangebar places an account's current balance on a track bounded by \
                  its recent balance history, marking zero and, for allowance \
                  accounts, the balance after the next scheduled transfer."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Range bar for an ordinary account
    Standard(StandardArgs),

    /// Range bar for an allowance account
    Allowance(AllowanceArgs),

    /// Range bar for an account snapshot, chosen by account type
    Account(AccountArgs),

    /// Grouped overview of a list of account snapshots
    Overview(OverviewArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    /// Write the active settings to the settings file
    #[arg(long)]
    init: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The range commands still work without a config directory
    let paths = RangebarPaths::new();
    let settings = match &paths {
        Ok(paths) => Settings::load_or_create(paths)?,
        Err(_) => Settings::default(),
    };

    let log_directive = match cli.verbose {
        0 => settings.log_level.clone(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };
    init_tracing(&log_directive);
    if let Err(e) = &paths {
        tracing::debug!(error = %e, "No config directory, using default settings");
    }

    match cli.command {
        Some(Commands::Standard(args)) => handle_standard_command(&settings, args)?,
        Some(Commands::Allowance(args)) => handle_allowance_command(&settings, args)?,
        Some(Commands::Account(args)) => handle_account_command(&settings, args)?,
        Some(Commands::Overview(args)) => handle_overview_command(&settings, args)?,
        Some(Commands::Config(args)) => {
            let paths = paths?;
            if args.init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }

            println!("rangebar Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default decimal places: {}", settings.default_decimal_places);
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Bar width:              {}", settings.bar_width);
            println!("  Log level:              {}", settings.log_level);
        }
        None => {
            println!("rangebar - balance range bars for budgeting accounts");
            println!();
            println!("Run 'rangebar --help' for usage information.");
        }
    }

    Ok(())
}
