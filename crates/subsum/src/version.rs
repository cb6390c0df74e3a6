//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with target information.
#[must_use]
pub fn full_version() -> String {
    format!(
        "subsum {} ({}-{})",
        version(),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}
