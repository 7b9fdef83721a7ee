use crate::core::display::OutputFormat;
use crate::types::AppResult;

pub mod config;

pub enum PrintCommand {
    Config(OutputFormat),
}

pub async fn execute_print(command: PrintCommand) -> AppResult<()> {
    match command {
        PrintCommand::Config(format) => config::execute(format).await,
    }
}
