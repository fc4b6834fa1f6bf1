// src/main.rs

use exitcheck::cli::RunMode;
use exitcheck::{child, cli, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("exitcheck error: {err:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();

    match args.mode() {
        RunMode::Child { token } => {
            // A child's stdout is the protocol channel; no subscriber here.
            child::run(token).await;
            Ok(())
        }
        RunMode::Parent { children } => {
            logging::init_logging(args.log_level)?;
            run(children).await
        }
    }
}
