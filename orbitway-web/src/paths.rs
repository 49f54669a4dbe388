//! URL helpers that respect the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/book` when hosted
//! under a subdirectory), generated URLs are prefixed accordingly.

fn public_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Prefix a root-relative path with the deployment base.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    let base = public_base().trim_end_matches('/');
    format!("{base}/{}", relative.trim_start_matches('/'))
}

/// Base path for the router; `None` when the app is hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = public_base().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
