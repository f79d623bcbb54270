use std::io;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use clap::Parser;

mod cli;
mod api;
mod core;
mod models;
mod crypto;
mod engine;
mod breach;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting SecurePass - Password Toolbox");

    // One-shot subcommand: run it and exit, no server
    if let Some(command) = args.command {
        return cli::handlers::run_command(command, &config, args.json)
            .await
            .map_err(|e| {
                log::error!("Command failed: {}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            });
    }

    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Initiating shutdown...");
            should_exit.store(true, Ordering::SeqCst);
            println!("\n👋 Shutdown complete. Goodbye!");
            std::process::exit(0);
        })
        .expect("Failed to set Ctrl+C handler");
    }

    let mut server_config = config.clone();
    if let Some(port) = args.api_port {
        server_config.web_port = port;
    }
    let api_port = server_config.web_port;

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("🔐 API-only mode active. CLI interface disabled.");
        return api::start_server(server_config).await;
    }

    // Start API server in background (using a separate thread for Actix)
    if !args.no_api {
        std::thread::spawn(move || {
            match tokio::runtime::Runtime::new() {
                Ok(rt) => {
                    rt.block_on(async {
                        if let Err(e) = api::start_server(server_config).await {
                            log::error!("API server error: {:?}", e);
                        }
                    });
                }
                Err(e) => {
                    log::error!("Failed to create tokio runtime: {:?}", e);
                }
            }
        });
        println!("🚀 API server started on port {}", api_port);
    }

    // CLI interactive menu
    cli::menu::run_menu(&config, should_exit).await.map_err(|e| {
        log::error!("CLI menu error: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    log::info!("✅ SecurePass shutdown complete.");

    Ok(())
}
