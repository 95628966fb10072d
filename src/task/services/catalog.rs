//! Enum catalog loading with silent fallback.

use crate::task::domain::EnumCatalog;
use crate::task::ports::TaskApi;

/// Loads the status/priority catalog at session start.
///
/// Either listing that is unreachable, malformed, or empty is replaced by
/// its hardcoded fallback table. The substitution is logged but never
/// surfaced: the selectors simply render the fallback values.
pub async fn load_catalog<A: TaskApi>(api: &A) -> EnumCatalog {
    let statuses = match api.statuses().await {
        Ok(values) if !values.is_empty() => values,
        Ok(_) => {
            tracing::warn!("status listing empty, using fallback set");
            EnumCatalog::fallback_statuses()
        }
        Err(err) => {
            tracing::warn!(%err, "status listing unavailable, using fallback set");
            EnumCatalog::fallback_statuses()
        }
    };
    let priorities = match api.priorities().await {
        Ok(values) if !values.is_empty() => values,
        Ok(_) => {
            tracing::warn!("priority listing empty, using fallback set");
            EnumCatalog::fallback_priorities()
        }
        Err(err) => {
            tracing::warn!(%err, "priority listing unavailable, using fallback set");
            EnumCatalog::fallback_priorities()
        }
    };
    EnumCatalog::new(statuses, priorities)
}
