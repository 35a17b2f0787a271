use anyhow::Result;
use clap::{Parser, Subcommand};
use dailytalk_common::{logger, AppConfig};

#[derive(Parser)]
#[command(name = "dailytalk")]
#[command(about = "DailyTalk - daily English dialogue generator backed by Gemini", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Gemini model revision
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env before reading config
    dotenv::dotenv().ok();

    match cli.command {
        Some(Commands::Serve { host, port, model }) => {
            // CLI arguments override environment
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());
            if let Some(model) = &model {
                std::env::set_var("GEMINI_MODEL", model);
            }

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("DailyTalk starting...");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Model: {}", config.gemini_model);

            println!("Server listening on http://{}:{}", host, port);

            dailytalk_server::start_server(config).await?;
        }
        None => {
            // Default: start server with default config
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("DailyTalk starting with default configuration...");

            let bind_addr = config.server_bind_address();
            println!("Server listening on http://{}", bind_addr);

            dailytalk_server::start_server(config).await?;
        }
    }

    Ok(())
}
