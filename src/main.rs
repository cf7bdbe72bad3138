//! # Auth Deletion Demo
//!
//! Runs the deletion system against its in-memory backends and walks through
//! every outcome a marker can end in:
//!
//! 1. `abc123` exists and is deleted → `success`
//! 2. `ghost` never existed → `not_found`
//! 3. `flaky` has a lookup hiccup, deletion still goes through → `success`
//! 4. `locked` refuses deletion → `failed`
//! 5. an empty uid → `failed` / `Missing UID`
//! 6. `abc123` delivered twice → the duplicate resolves to `not_found`

use auth_deletion::account_actor::{AccountError, AccountOp};
use auth_deletion::clients::AccountService;
use auth_deletion::lifecycle::{setup_tracing, DeletionSystem, Platform};
use auth_deletion::model::{AccountInfo, MarkerRef};
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting deletion system");
    let system = DeletionSystem::new();

    Platform::init(
        Arc::new(system.account_client.clone()),
        Arc::new(system.store_client.clone()),
    );

    let span = tracing::info_span!("seed_accounts");
    async {
        for account in [
            AccountInfo::new("abc123").with_email("alice@example.com"),
            AccountInfo::new("flaky").with_display_name("Flaky Fred"),
            AccountInfo::new("locked"),
        ] {
            system
                .account_client
                .create_account(account)
                .await
                .map_err(|e| e.to_string())?;
        }
        system
            .account_client
            .fail_next(
                "flaky",
                AccountOp::Lookup,
                AccountError::from_code("flaky", "auth/internal-error", "lookup timed out"),
            )
            .await
            .map_err(|e| e.to_string())?;
        system
            .account_client
            .fail_next(
                "locked",
                AccountOp::Delete,
                AccountError::from_code(
                    "locked",
                    "auth/insufficient-permission",
                    "caller may not delete this user",
                ),
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("deletion_requests");
    async {
        for uid in ["abc123", "ghost", "flaky", "locked", ""] {
            let reference = system
                .store_client
                .create_marker(uid)
                .await
                .map_err(|e| e.to_string())?;
            system
                .wait_for_annotation(&reference)
                .await
                .map_err(|e| e.to_string())?;
        }

        // At-least-once delivery: the same marker fires again.
        system
            .store_client
            .redeliver(&MarkerRef::new("abc123"))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Direct invocation through the platform handle, the way a host runtime
    // would call it.
    if let Some(platform) = Platform::get() {
        let update = platform
            .handler()
            .handle(Some("ghost"), &MarkerRef::new("ghost"))
            .await;
        info!(status = %update.status, "Platform handler invoked");
    }

    let remaining = system
        .account_client
        .lookup("abc123")
        .await
        .map_err(|e| e.to_string());
    info!(abc123_present = remaining.is_ok(), "Account check");

    let report = system.shutdown().await?;
    for marker in &report.markers {
        let json = serde_json::to_string(marker).map_err(|e| e.to_string())?;
        info!(path = %MarkerRef::new(marker.id.as_str()), %json, "Final marker");
    }

    info!(
        success = report.summary.success,
        failed = report.summary.failed,
        not_found = report.summary.not_found,
        "Application completed successfully"
    );
    Ok(())
}
