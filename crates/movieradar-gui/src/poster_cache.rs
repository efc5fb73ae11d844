use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// State of a poster image for a given URL.
#[derive(Debug, Clone, PartialEq)]
pub enum PosterState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory index of poster downloads, keyed by image URL.
///
/// Files live under `dir`; a poster already on disk is reused without a
/// network round trip.
#[derive(Debug)]
pub struct PosterCache {
    dir: PathBuf,
    states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            states: HashMap::new(),
        }
    }

    pub fn get(&self, url: &str) -> Option<&PosterState> {
        self.states.get(url)
    }

    /// Decide whether `url` still needs downloading.
    ///
    /// Returns the target path when a download should start, and marks the
    /// URL as loading. Returns `None` when the poster is already known.
    pub fn begin(&mut self, url: &str) -> Option<PathBuf> {
        if self.states.contains_key(url) {
            return None;
        }
        let path = poster_path(&self.dir, url);
        if path.exists() {
            self.states.insert(url.to_string(), PosterState::Loaded(path));
            return None;
        }
        self.states.insert(url.to_string(), PosterState::Loading);
        Some(path)
    }

    pub fn finish(&mut self, url: String, result: Result<PathBuf, String>) {
        let state = match result {
            Ok(path) => PosterState::Loaded(path),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "poster download failed");
                PosterState::Failed
            }
        };
        self.states.insert(url, state);
    }
}

/// 64-bit FNV-1a. File names must stay the same across builds, which std's
/// hashers do not promise.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}

/// File name for a poster URL: a stable hash plus the URL's extension.
pub fn poster_path(dir: &Path, url: &str) -> PathBuf {
    let ext = url
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.len() <= 4 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or("jpg");
    dir.join(format!("{:016x}.{ext}", fnv1a(url.as_bytes())))
}

/// Download a poster and save it to `path`. Returns the saved path.
pub async fn fetch_poster(url: String, path: PathBuf) -> Result<PathBuf, String> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| e.to_string())?;
    }

    let resp = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let bytes = resp.bytes().await.map_err(|e| e.to_string())?;

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| e.to_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://image.tmdb.org/t/p/w342/abc.jpg";

    #[test]
    fn test_poster_path_is_stable() {
        let dir = Path::new("/tmp/posters");
        assert_eq!(poster_path(dir, URL), poster_path(dir, URL));
        assert_ne!(poster_path(dir, URL), poster_path(dir, "https://x/other.jpg"));
        assert_eq!(
            poster_path(dir, "https://x/p.png").extension().unwrap(),
            "png"
        );
        assert_eq!(
            poster_path(dir, "https://x/no-extension").extension().unwrap(),
            "jpg"
        );
    }

    #[test]
    fn test_file_names_are_fixed_across_builds() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(
            poster_path(Path::new("/tmp/posters"), URL),
            Path::new("/tmp/posters/af442e22e5f80a0d.jpg")
        );
    }

    #[test]
    fn test_begin_only_once() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cache = PosterCache::new(tmp.path().to_path_buf());

        assert!(cache.begin(URL).is_some());
        assert_eq!(cache.get(URL), Some(&PosterState::Loading));
        assert!(cache.begin(URL).is_none());

        cache.finish(URL.to_string(), Err("timeout".into()));
        assert_eq!(cache.get(URL), Some(&PosterState::Failed));
    }

    #[test]
    fn test_disk_hit_skips_download() {
        let tmp = tempfile::tempdir().unwrap();
        let path = poster_path(tmp.path(), URL);
        std::fs::write(&path, b"jpeg").unwrap();

        let mut cache = PosterCache::new(tmp.path().to_path_buf());
        assert!(cache.begin(URL).is_none());
        assert_eq!(cache.get(URL), Some(&PosterState::Loaded(path)));
    }
}
