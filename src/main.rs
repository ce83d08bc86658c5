pub mod api;
pub mod client;
pub mod config;
pub mod ui;
pub mod utils;

use std::{process::ExitCode, sync::Arc};

use api::remote::ApiClient;
use test::TestRunner;
use tokio::io::BufReader;
use tracing::error;
use tracing_subscriber::EnvFilter;
use ui::TerminalUi;

fn main() -> ExitCode {
    let config = match config::get_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging("warn");
            error!("Config loading failed: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            init_logging("warn");
            error!("Tokio runtime creation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = if let Some(test_mode_config) = config.test_mode() {
        init_logging("info");
        runtime
            .block_on(async { TestRunner::new(config, test_mode_config).run().await })
            .map_err(|e| format!("{e:?}"))
    } else {
        init_logging("warn");
        let api = ApiClient::new(config.base_url());
        api.print_to_log();
        let mut ui = TerminalUi::new(
            Arc::new(api),
            config.show_history_on_start(),
            std::io::stdout(),
        );
        runtime
            .block_on(async { ui.run(BufReader::new(tokio::io::stdin())).await })
            .map_err(|e| format!("{e:?}"))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that they do not mix with the calculator output.
/// `RUST_LOG` overrides the default filter.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
