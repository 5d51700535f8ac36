use anyhow::Result;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;

use crate::render::Renderer;

const SCAN_INTERVAL: Duration = Duration::from_secs(2);

type ViewsFingerprint = BTreeMap<PathBuf, SystemTime>;

pub fn init_reload_worker(renderer: Arc<Renderer>) -> (JoinHandle<()>, CancellationToken) {
    let worker_cancel = CancellationToken::new();

    (
        tokio::spawn(spawn_worker(renderer, worker_cancel.clone())),
        worker_cancel,
    )
}

async fn spawn_worker(renderer: Arc<Renderer>, stop_signal: CancellationToken) {
    let mut last_fingerprint: Option<ViewsFingerprint> = None;

    loop {
        match scan_views(renderer.dir_views()) {
            Ok(fingerprint) => {
                if let Some(last) = &last_fingerprint {
                    if *last != fingerprint {
                        info!("View templates changed, clearing the template cache");
                        renderer.clear_template_cache();
                    }
                }

                last_fingerprint = Some(fingerprint);
            }
            Err(err) => warn!("Could not scan the views directory: {err:#}"),
        }

        tokio::select! {
            _ = sleep(SCAN_INTERVAL) => {
                continue;
            }

            _ = stop_signal.cancelled() => {
                info!("gracefully shutting down template reload worker...");
                break;
            }
        };
    }
}

fn scan_views(dir_views: &Path) -> Result<ViewsFingerprint> {
    let mut fingerprint = BTreeMap::new();

    for entry in WalkDir::new(dir_views) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        fingerprint.insert(entry.path().to_path_buf(), modified);
    }

    debug!("Found {} template files", fingerprint.len());

    Ok(fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fingerprint_tracks_every_template_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("home.html"), "home").unwrap();
        fs::create_dir(temp.path().join("users")).unwrap();
        fs::write(temp.path().join("users/profile.html"), "profile").unwrap();

        let fingerprint = scan_views(temp.path()).unwrap();

        assert_eq!(fingerprint.len(), 2);
        assert!(fingerprint.contains_key(&temp.path().join("users/profile.html")));
    }

    #[test]
    fn fingerprint_changes_when_a_template_is_added() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("home.html"), "home").unwrap();

        let before = scan_views(temp.path()).unwrap();
        fs::write(temp.path().join("about.html"), "about").unwrap();
        let after = scan_views(temp.path()).unwrap();

        assert_ne!(before, after);
    }
}
