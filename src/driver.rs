//! Watch loop: probe, update the indicator, wait, repeat

use std::convert::Infallible;
use std::sync::Arc;

use tokio::time::{sleep, Duration};

use crate::indicator::{Element, Indicator, Status};
use crate::probe::{Probe, DEFAULT_TIMEOUT_MS};

/// Default delay between probes in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Per-probe timeout
    pub timeout: Duration,
    /// Delay after each probe
    pub interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Connected,
    Disconnected,
}

impl From<Status> for Phase {
    fn from(status: Status) -> Self {
        match status {
            Status::Connected => Phase::Connected,
            Status::Disconnected => Phase::Disconnected,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("Target URL is empty")]
    EmptyUrl,

    #[error("Already watching '{target}'")]
    AlreadyStarted { target: String },

    #[error("Watch loop has no target; call start first")]
    NotStarted,
}

/// Owns the probe and the elements it drives; nothing is looked up globally.
#[derive(Debug)]
pub struct Driver<P, S, E> {
    probe: P,
    start_control: S,
    indicator: Indicator<E>,
    settings: Settings,
    target: Option<Arc<str>>,
    phase: Phase,
    iterations: u64,
}

impl<P: Probe, S: Element, E: Element> Driver<P, S, E> {
    pub fn new(probe: P, start_control: S, indicator: Indicator<E>, settings: Settings) -> Self {
        Self {
            probe,
            start_control,
            indicator,
            settings,
            target: None,
            phase: Phase::Idle,
            iterations: 0,
        }
    }

    /// One-shot Idle -> running transition. Captures the target and hides the start control.
    /// An empty URL keeps the driver idle with the start control shown.
    pub fn start(&mut self, url: &str) -> Result<(), StartError> {
        if let Some(target) = &self.target {
            return Err(StartError::AlreadyStarted {
                target: target.to_string(),
            });
        }
        let url = url.trim();
        if url.is_empty() {
            self.start_control.set_visible(true);
            return Err(StartError::EmptyUrl);
        }

        self.start_control.set_visible(false);
        self.target = Some(Arc::from(url));
        tracing::info!("Watching {}", url);
        Ok(())
    }

    /// Run one probe and show its result. `None` while idle.
    pub async fn step(&mut self) -> Option<Status> {
        let target = Arc::clone(self.target.as_ref()?);
        self.iterations += 1;

        let status = Status::from(self.probe.probe(&target, self.settings.timeout).await);
        self.indicator.show(status);
        let previous = std::mem::replace(&mut self.phase, status.into());
        if previous != self.phase {
            tracing::debug!("{} is now {:?} (iteration {})", target, status, self.iterations);
        }
        Some(status)
    }

    /// Poll forever. Returns only if the driver was never started.
    pub async fn run(&mut self) -> Result<Infallible, StartError> {
        if self.target.is_none() {
            return Err(StartError::NotStarted);
        }
        tracing::info!(
            "Probing every {} ms (timeout {} ms)",
            self.settings.interval.as_millis(),
            self.settings.timeout.as_millis()
        );

        loop {
            self.step().await;
            sleep(self.settings.interval).await;
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Probes issued so far
    #[cfg(test)]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[cfg(test)]
    pub fn start_control(&self) -> &S {
        &self.start_control
    }

    #[cfg(test)]
    pub fn indicator(&self) -> &Indicator<E> {
        &self.indicator
    }
}
