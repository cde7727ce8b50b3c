//! Readiness gate - block until a dependency accepts connections
//!
//! The gate polls a [`ReadinessProbe`] until it succeeds. Each failure is
//! classified by the probe itself:
//! - [`FailureClass::Transient`]: report, sleep the fixed interval, retry
//! - [`FailureClass::Fatal`]: stop immediately and hand the error back
//!
//! There is no backoff and, unless [`GatePolicy::max_attempts`] is set, no
//! retry limit. Whatever runs the gate (an orchestrator health check, a
//! deploy timeout) is expected to bound the total wait.

use std::error::Error as StdError;
use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// How the gate treats a failed readiness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Dependency is not up yet, try again later
    Transient,
    /// Anything else; retrying won't help
    Fatal,
}

/// A lightweight, side-effect-free availability check (testable)
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Perform one check. `Ok(())` means the dependency is ready.
    async fn probe(&self) -> Result<(), Self::Error>;

    /// Decide whether a failed check is worth retrying
    fn classify(&self, error: &Self::Error) -> FailureClass;
}

/// Suspends the gate between attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Receives the operator-facing status of a gate run
pub trait GateObserver {
    /// Emitted once, before the first attempt
    fn waiting(&mut self, target: &str);

    /// Emitted after every transient failure, before sleeping
    fn unavailable(&mut self, attempt: u32, delay: Duration, error: &dyn StdError);

    /// Emitted once, when the dependency answered
    fn ready(&mut self, report: &GateReport);
}

/// Prints the status lines an operator watches during container startup
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl ConsoleObserver<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GateObserver for ConsoleObserver<W> {
    fn waiting(&mut self, target: &str) {
        writeln!(self.out, "Waiting for database '{}'...", target).ok();
        self.out.flush().ok();
    }

    fn unavailable(&mut self, _attempt: u32, delay: Duration, _error: &dyn StdError) {
        writeln!(self.out, "Database unavailable, waiting {}...", format_delay(delay)).ok();
        self.out.flush().ok();
    }

    fn ready(&mut self, report: &GateReport) {
        writeln!(self.out, "✅ Database '{}' is ready", report.target).ok();
        self.out.flush().ok();
    }
}

fn format_delay(delay: Duration) -> String {
    if delay.subsec_millis() == 0 {
        format!("{}s", delay.as_secs())
    } else {
        format!("{}ms", delay.as_millis())
    }
}

/// Retry policy for the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePolicy {
    /// Fixed delay between attempts
    pub interval: Duration,
    /// Stop after this many transient failures; `None` retries forever
    pub max_attempts: Option<u32>,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

/// Outcome of a successful gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    pub target: String,
    /// Readiness checks performed, including the successful one
    pub attempts: u32,
    /// Sleeps taken between attempts
    pub retries: u32,
    pub elapsed: Duration,
}

/// Why the gate gave up
#[derive(Debug, Error)]
pub enum GateError<E>
where
    E: StdError + 'static,
{
    #[error("readiness check failed on attempt {attempt}: {source}")]
    Fatal {
        attempt: u32,
        #[source]
        source: E,
    },

    #[error("dependency still unavailable after {attempts} attempt(s): {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: E,
    },
}

impl<E> GateError<E>
where
    E: StdError + 'static,
{
    /// The probe error that ended the run
    pub fn probe_error(&self) -> &E {
        match self {
            Self::Fatal { source, .. } => source,
            Self::Exhausted { last, .. } => last,
        }
    }

    pub fn into_probe_error(self) -> E {
        match self {
            Self::Fatal { source, .. } => source,
            Self::Exhausted { last, .. } => last,
        }
    }
}

/// Polls a probe until it reports ready
pub struct ReadinessGate<P, S = TokioSleeper, O = ConsoleObserver<std::io::Stdout>> {
    target: String,
    probe: P,
    sleeper: S,
    observer: O,
    policy: GatePolicy,
}

impl<P: ReadinessProbe> ReadinessGate<P> {
    /// Gate with the real tokio sleeper, printing to stdout
    pub fn new(target: impl Into<String>, probe: P) -> Self {
        Self::with_parts(target, probe, TokioSleeper, ConsoleObserver::stdout())
    }
}

impl<P, S, O> ReadinessGate<P, S, O>
where
    P: ReadinessProbe,
    S: Sleeper,
    O: GateObserver,
{
    pub fn with_parts(target: impl Into<String>, probe: P, sleeper: S, observer: O) -> Self {
        Self {
            target: target.into(),
            probe,
            sleeper,
            observer,
            policy: GatePolicy::default(),
        }
    }

    pub fn policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn into_parts(self) -> (P, S, O) {
        (self.probe, self.sleeper, self.observer)
    }

    /// Run the gate until the probe succeeds or fails fatally
    pub async fn wait(&mut self) -> Result<GateReport, GateError<P::Error>> {
        let started = Instant::now();
        let mut attempts: u32 = 0;
        let mut retries: u32 = 0;

        self.observer.waiting(&self.target);

        loop {
            attempts = attempts.saturating_add(1);
            debug!(target_db = %self.target, attempt = attempts, "running readiness check");

            let error = match self.probe.probe().await {
                Ok(()) => break,
                Err(error) => error,
            };

            match self.probe.classify(&error) {
                FailureClass::Fatal => {
                    debug!(attempt = attempts, error = %error, "readiness check failed fatally");
                    return Err(GateError::Fatal {
                        attempt: attempts,
                        source: error,
                    });
                }
                FailureClass::Transient => {
                    debug!(attempt = attempts, error = %error, "dependency not ready yet");
                }
            }

            if self.policy.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(GateError::Exhausted {
                    attempts,
                    last: error,
                });
            }

            self.observer.unavailable(attempts, self.policy.interval, &error);
            self.sleeper.sleep(self.policy.interval).await;
            retries = retries.saturating_add(1);
        }

        let report = GateReport {
            target: self.target.clone(),
            attempts,
            retries,
            elapsed: started.elapsed(),
        };
        info!(
            target_db = %report.target,
            attempts = report.attempts,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "dependency ready"
        );
        self.observer.ready(&report);
        Ok(report)
    }
}
