//! recipectl-db: PostgreSQL side of the readiness gate
//!
//! - `pool`: connect options from config, pool helper for host processes
//! - `probe`: `PgProbe` and the transient/fatal classification of sqlx errors

pub mod pool;
pub mod probe;

pub use pool::{connect_options, create_pool, create_pool_with_options};
pub use probe::{classify, classify_sqlstate, PgProbe, ProbeError, DEFAULT_PROBE_TIMEOUT};
