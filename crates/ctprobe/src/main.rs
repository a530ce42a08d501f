use std::io;
use std::process::ExitCode;

use clap::Parser;
use ctprobe_fetch::{Fetcher, ReqwestClient, RequestOutcome, report};
use tracing::{error, warn};

mod cli;
mod logging;

fn main() -> ExitCode {
    let app = cli::App::parse();
    if let Err(e) = logging::init(app.verbose) {
        eprintln!("ctprobe: {e:#}");
    }

    let outcome = probe(&app);
    if let Err(e) = report(&outcome, &mut io::stdout().lock()) {
        error!(error = %e, "failed to write report");
    }
    outcome.status().into()
}

fn probe(app: &cli::App) -> RequestOutcome {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!(error = %e, "failed to build async runtime");
            return RequestOutcome::init_failed();
        }
    };

    let fetcher = Fetcher::new(ReqwestClient::new(app.client_setting()));
    runtime.block_on(fetcher.run(&app.fetch_options()))
}
