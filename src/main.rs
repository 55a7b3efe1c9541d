//! walletauth entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Create the challenge store
//! 3. Build router with API routes + static file serving
//! 4. Start Axum server
//!
//! Also supports `keygen` and `sign` subcommands for trying the flow
//! without a browser wallet.

use walletauth::{config::Config, routes, wallet};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  walletauth                     Run the server");
    eprintln!("  walletauth keygen              Generate a wallet keypair");
    eprintln!("  walletauth sign <secret> <msg> Sign a nonce with a base58 secret");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  walletauth keygen");
    eprintln!("  curl -s localhost:3000/api/nonce -d '{{\"address\":\"<address>\"}}' \\");
    eprintln!("       -H 'content-type: application/json'");
    eprintln!("  walletauth sign <secret> <nonce>");
}

/// Handle CLI subcommands. Returns `None` when the server should start.
fn run_subcommand(args: &[String]) -> Option<i32> {
    match args.get(1).map(String::as_str) {
        None => None,
        Some("keygen") if args.len() == 2 => {
            let keypair = wallet::generate_keypair();
            println!("address: {}", keypair.address);
            println!("secret:  {}", keypair.secret.as_str());
            Some(0)
        }
        Some("sign") if args.len() == 4 => match wallet::sign_message(&args[2], &args[3]) {
            Ok(signature) => {
                println!("{}", signature);
                Some(0)
            }
            Err(e) => {
                eprintln!("Error signing message: {}", e);
                Some(1)
            }
        },
        Some(_) => {
            print_usage();
            Some(1)
        }
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Some(code) = run_subcommand(&args) {
        std::process::exit(code);
    }

    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("Failed to load config");
    tracing::info!(?config, "Starting walletauth");

    let bind_addr = config.bind_addr;
    let app = routes::app(routes::AppState::new(config));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
