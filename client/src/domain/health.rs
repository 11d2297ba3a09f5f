//! Backend reachability logging.

use tracing::{info, warn};

use crate::domain::ports::PortalHealth;

/// Probe the backend once and log the result.
///
/// Returns whether the backend answered. Lookups never depend on this.
pub async fn report_backend_health(probe: &dyn PortalHealth) -> bool {
    match probe.check().await {
        Ok(report) => {
            info!(
                status = report.message.as_deref().unwrap_or("unknown"),
                "portal backend reachable"
            );
            true
        }
        Err(error) => {
            warn!(%error, "portal backend health check failed");
            false
        }
    }
}
