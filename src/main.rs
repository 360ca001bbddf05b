//! Jotter Web Server
//!
//! A personal note-taking service with bearer-token authentication.

use clap::Parser;
use jotter::server::JotterServerBuilder;
use jotter::{init_logging, WebConfig};

/// Jotter - a personal note-taking service
#[derive(Parser)]
#[command(name = "jotter")]
#[command(about = "A personal note-taking web service")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Token lifetime in days
    #[arg(long, default_value = "30")]
    token_ttl_days: i64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    std::env::set_var(
        "RUST_LOG",
        format!("jotter={},tower_http=debug", args.log_level),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = WebConfig::from_env();

    if config.jwt_secret == WebConfig::default().jwt_secret {
        println!("⚠️  Warning: JOTTER_JWT_SECRET is not set; using the default development secret.");
        println!("   Set JOTTER_JWT_SECRET before running in production.");
    }

    println!("🚀 Starting Jotter Web Server");
    println!("📍 Server: http://{}:{}", args.host, args.port);

    let server = match JotterServerBuilder::new()
        .host(args.host)
        .port(args.port)
        .token_ttl_days(args.token_ttl_days)
        .build()
    {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }
}
