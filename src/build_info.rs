/// Build-time git commit SHA stamped by build.rs when available.
pub fn git_sha() -> Option<&'static str> {
    option_env!("TODO_BUILD_GIT_SHA")
}

/// Version string for `--version`, suffixed with the short commit when known.
pub fn long_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match git_sha() {
        Some(sha) => format!("{version} ({})", &sha[..sha.len().min(12)]),
        None => version.to_string(),
    }
}
