pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_COMMIT_HASH_KEY: Option<&str> = option_env!("DEALCACHE_GIT_COMMIT_HASH");

#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION.to_string(),
        commit: GIT_COMMIT_HASH_KEY.unwrap_or("unknown").to_string(),
    }
}
