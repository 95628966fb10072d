//! Debounced search-as-you-type over the user directory.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::account::domain::{UserId, UserRecord, filter_directory};
use crate::account::ports::UserApi;

/// Delay between the last keystroke and the directory query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Result of one keystroke's search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A newer keystroke superseded this search; discard it.
    Superseded,
    /// The matches to display, possibly empty.
    Matches(Vec<UserRecord>),
}

/// Debounced assignee search.
///
/// Each keystroke supersedes any pending search: only the most recent
/// keystroke's timer is allowed to issue a query, and a superseded
/// search stays discarded even when its directory response resolves
/// late. Directory fetch failures are silent and render as an empty
/// result.
#[derive(Debug)]
pub struct DirectorySearch<A: UserApi> {
    api: Arc<A>,
    delay: Duration,
    generation: AtomicU64,
}

impl<A: UserApi> DirectorySearch<A> {
    /// Creates a search with the standard debounce delay.
    #[must_use]
    pub const fn new(api: Arc<A>) -> Self {
        Self {
            api,
            delay: SEARCH_DEBOUNCE,
            generation: AtomicU64::new(0),
        }
    }

    /// Overrides the debounce delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handles one keystroke of the search input.
    ///
    /// Supersedes any pending search immediately, waits out the debounce
    /// interval, then queries and filters the directory. An input that is
    /// empty after trimming resolves to no matches without a query.
    pub async fn keystroke(&self, query: &str, current_user: UserId) -> SearchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let needle = query.trim().to_owned();
        if needle.is_empty() {
            return SearchOutcome::Matches(Vec::new());
        }

        tokio::time::sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return SearchOutcome::Superseded;
        }

        let entries = match self.api.list_directory().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(%err, "directory fetch failed, showing no matches");
                Vec::new()
            }
        };
        // The response may resolve after a newer keystroke arrived.
        if self.generation.load(Ordering::SeqCst) != generation {
            return SearchOutcome::Superseded;
        }

        SearchOutcome::Matches(filter_directory(&entries, &needle, current_user))
    }
}
