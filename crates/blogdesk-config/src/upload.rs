use std::env;
use std::path::PathBuf;

/// Where uploaded images are written and how they are addressed.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Directory the files are written to.
    pub dir: PathBuf,
    /// URL prefix the directory is served under.
    pub public_path: String,
    /// Largest accepted file in bytes.
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            public_path: "/uploads".to_string(),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dir),
            public_path: env::var("UPLOAD_PUBLIC_PATH")
                .ok()
                .and_then(|raw| normalize_public_path(&raw))
                .unwrap_or(defaults.public_path),
            max_bytes: env::var("UPLOAD_MAX_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_bytes),
        }
    }
}

/// `/`-prefixed form of a URL prefix with no trailing slash. A prefix that
/// is empty or only slashes is `None`, since uploads are never served from
/// the root.
fn normalize_public_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/{}", trimmed))
}
