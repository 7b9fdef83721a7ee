use std::env;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches};
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds;
use crate::core::cmds::dashboard::DashboardSource;
use crate::core::logging::init_logging;
use crate::core::store::SqlStore;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides, set_namespace};

pub async fn run_main(namespace: &str, description: &str) -> AppResult<()> {
    // Set namespace at start (derives config/db filenames)
    set_namespace(namespace);

    // Override CLI help text with namespace and description
    // Leak strings to get 'static lifetime for clap
    let namespace_static: &'static str = Box::leak(namespace.to_string().into_boxed_str());
    let description_static: &'static str =
        Box::leak(format!("{} - {}", description, namespace).into_boxed_str());

    let mut cmd = Args::command();
    cmd = cmd.name(namespace_static).about(description_static);
    let matches = cmd.get_matches();
    let args = Args::from_arg_matches(&matches)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        db: args.db.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (files, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", env::current_dir()?.display());

    // Dispatch to appropriate command
    match args.command {
        Commands::Init => {
            cmds::execute_init(open_store().await?).await?;
        }
        Commands::Record(record_args) => {
            cmds::execute_record(record_args, open_store().await?).await?;
        }
        Commands::Dashboard(dashboard_args) => {
            // A statistics document is rendered as-is, without touching the database
            let source = match dashboard_args.input.clone() {
                Some(path) => DashboardSource::Document(path),
                None => DashboardSource::Store(open_store().await?),
            };
            cmds::execute_dashboard(dashboard_args, source).await?;
        }
        Commands::Summary(summary_args) => {
            cmds::execute_summary(summary_args, open_store().await?).await?;
        }
        Commands::Days(days_args) => {
            cmds::execute_days(days_args, open_store().await?).await?;
        }
        Commands::Cleanup(cleanup_args) => {
            cmds::execute_cleanup(cleanup_args, open_store().await?).await?;
        }
        Commands::Print {
            command: print_args,
        } => match print_args {
            PrintArgs::Config(args) => {
                cmds::execute_print(cmds::print::PrintCommand::Config(args.format)).await?
            }
        },
    }

    Ok(())
}

async fn open_store() -> AppResult<SqlStore> {
    let db_path = config().db();
    let db_file = PathBuf::from(&db_path);

    if !db_file.exists() {
        debug!(
            "Database file doesn't exist. Creating it at: {}",
            db_file.display()
        );
        let file = std::fs::File::create(&db_file)?;
        drop(file);
    }

    let db_connection_string = format!("sqlite:{db_path}");
    debug!("Using database: {db_connection_string}");
    Ok(SqlStore::new(db_connection_string).await?)
}
