//! Common display utilities for CLI commands.

use philia::AccountId;

/// Render account IDs as a space-separated list.
pub fn format_ids(ids: &[AccountId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a connection as a compact `a → b → c` route.
pub fn format_route(ids: &[AccountId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}
