use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use snaplink::cli::{Cli, Commands, ConfigCommands};
use snaplink::config::init_config;
use snaplink::errors::SnaplinkError;
use snaplink::runtime::modes;
use snaplink::system::init_logging;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // 生成配置不需要加载配置和日志
    if let Some(Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    }) = &cli.command
    {
        let path = modes::generate_config(output_path.as_deref(), *force)?;
        println!("{} {}", "Configuration written to".green(), path);
        return Ok(());
    }

    let config = init_config(cli.config.as_deref())?;
    let _log_guard = init_logging(&config.logging)?;

    match cli.command {
        None | Some(Commands::Serve) => modes::run_server(config).await,
        Some(Commands::Migrate) => modes::run_migrate(config).await,
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn report_error(err: &anyhow::Error) {
    if let Some(e) = err.downcast_ref::<SnaplinkError>() {
        eprintln!("{}", e.format_colored());
        return;
    }
    eprintln!("{} {:#}", "[ERROR]".red().bold(), err);
}
