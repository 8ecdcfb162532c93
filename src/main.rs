//! Reach Watch: poll a URL and show whether it is reachable.

mod driver;
mod indicator;
mod probe;
mod terminal;

use std::io;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Duration;

use driver::{Driver, Settings, StartError};
use indicator::{Element, Indicator};
use probe::HttpProbe;
use terminal::TerminalElement;

#[derive(Parser, Debug)]
#[command(
    name = "reach-watch",
    about = "Poll a URL and show whether it is reachable",
    long_about = "Sends a short GET to the target every interval. Any response shows [connected]; errors and timeouts show [timeout]. Runs until interrupted."
)]
struct Cli {
    /// Target URL; prompted on stdin when omitted
    #[arg(long)]
    pub url: Option<String>,

    /// Probe timeout in milliseconds
    #[arg(long, default_value_t = probe::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Delay between probes in milliseconds
    #[arg(long, default_value_t = driver::DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Host header sent with each probe
    #[arg(long, default_value = probe::DEFAULT_HOST_HEADER)]
    pub host: String,

    /// User-Agent sent with each probe
    #[arg(long, default_value = probe::DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            timeout: Duration::from_millis(self.timeout_ms),
            interval: Duration::from_millis(self.interval_ms),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs on stderr; stdout belongs to the indicator lines.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let probe = HttpProbe::new(&cli.host, &cli.user_agent)?;
    let indicator = Indicator::new(
        TerminalElement::new(terminal::CONNECTED_TEXT, io::stdout()),
        TerminalElement::new(terminal::TIMEOUT_TEXT, io::stdout()),
    );
    let mut start_control = TerminalElement::new(terminal::START_TEXT, io::stdout());
    if cli.url.is_none() {
        start_control.set_visible(true);
    }
    let mut driver = Driver::new(probe, start_control, indicator, cli.settings());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = cli.url.clone();
    loop {
        let url = match pending.take() {
            Some(url) => url,
            None => lines
                .next_line()
                .await?
                .ok_or_else(|| anyhow::anyhow!("Input closed before a target URL was entered"))?,
        };
        match driver.start(&url) {
            Ok(()) => break,
            Err(StartError::EmptyUrl) => {
                tracing::warn!("Target URL is empty, enter a URL to start");
            }
            Err(e) => return Err(e.into()),
        }
    }

    match driver.run().await {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}
