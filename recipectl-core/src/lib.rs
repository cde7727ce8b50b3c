//! recipectl-core: configuration and the database readiness gate
//!
//! The gate knows nothing about PostgreSQL. Drivers plug in through
//! [`ReadinessProbe`], which both performs the check and classifies its
//! own failures.

pub mod config;
pub mod error;
pub mod readiness;

pub use config::{load_dotenv, DatabaseConfig, ReadinessConfig, RecipeConfig, DEFAULT_ALIAS};
pub use error::{RecipeError, Result};
pub use readiness::{
    ConsoleObserver, FailureClass, GateError, GateObserver, GatePolicy, GateReport,
    ReadinessGate, ReadinessProbe, Sleeper, TokioSleeper,
};
