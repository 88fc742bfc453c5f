// src/main.rs

use launchspec::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("launchspec error: {err}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> launchspec::errors::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
