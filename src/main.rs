use clap::Parser;
use arca::errors::ErrorHandler;
use arca::structs::cli::Cli;
use arca::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::new().run_command(cli).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
