//! Client-side filtering of the user directory.

use super::{UserId, UserRecord};

/// Maximum number of matches shown by the assignee search.
pub const DIRECTORY_MATCH_LIMIT: usize = 5;

/// Filters directory entries for the assignee search.
///
/// Matching is a case-insensitive substring test on username or email.
/// The current user is excluded, directory order is preserved, and the
/// result is capped at [`DIRECTORY_MATCH_LIMIT`]. A query that is empty
/// after trimming matches nothing.
#[must_use]
pub fn filter_directory(
    entries: &[UserRecord],
    query: &str,
    current_user: UserId,
) -> Vec<UserRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|entry| entry.id != current_user)
        .filter(|entry| {
            entry.username.to_lowercase().contains(&needle)
                || entry.email.to_lowercase().contains(&needle)
        })
        .take(DIRECTORY_MATCH_LIMIT)
        .cloned()
        .collect()
}
