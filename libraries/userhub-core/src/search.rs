//! Case-insensitive user search
//!
//! A query matches when it is a substring of the name, the email or the
//! company name. There is no index: every call scans the full list.

use crate::types::User;

/// Whether `user` matches an already lowercased query
fn matches_lowered(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user.company.name.to_lowercase().contains(needle)
}

/// Whether `user` matches `query`. The empty query matches everyone.
pub fn matches_query(user: &User, query: &str) -> bool {
    matches_lowered(user, &query.to_lowercase())
}

/// Users matching `query`, in their original order
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| matches_lowered(user, &needle))
        .collect()
}
