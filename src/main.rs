use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use token_issuer::config::load_issuer_config;
use token_issuer::issuer::TokenIssuer;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = env::args_os().skip(1).collect::<Vec<_>>();
    if args.len() != 1 {
        eprintln!("usage: token-issuer <path_to_private_key.pem>");
        return ExitCode::FAILURE;
    }
    let key_path = PathBuf::from(&args[0]);

    let config = match load_issuer_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading issuer configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let issuer = TokenIssuer::new(config);
    match issuer.issue(&key_path) {
        Ok(token) => {
            // The calling shell captures stdout; the token must be the
            // only thing written there.
            println!("{token}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
