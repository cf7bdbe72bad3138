//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per marker outcome
//! RUST_LOG=debug cargo run     # full payloads and every actor request
//! RUST_LOG=auth_deletion::handler=debug cargo run
//! ```
//!
//! Handler logs sit inside a `delete_account` span carrying the uid:
//!
//! ```text
//! INFO delete_account{uid="abc123"}: Account deleted
//! WARN delete_account{uid="flaky"}: Proceeding with delete error=Account lookup inconclusive: ...
//! INFO delete_account{uid="ghost"}: Account already gone
//! ```

/// Initializes the global subscriber.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
