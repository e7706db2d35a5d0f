//! A filesystem-backed [`EntityStore`], reading one JSON document in place
//! of a live catalog/scrobble service.
//!
//! This is a debugging aid, not a production backend, in the same spirit as
//! this codebase's own debug filesystem repository: it lives alongside the
//! trait it implements rather than inside the query pipeline, and every
//! entity it serves round-trips the same shapes the pipeline consumes from
//! any other store.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entity::{Album, Artist, EntityStore, Listening, Tag, Track};
use crate::error::Error;

/// The on-disk document shape read and written by [`DebugFileStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugSnapshot {
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Listening history, ordered most-recent-first.
    #[serde(default)]
    pub listenings: Vec<Listening>,
}

/// Reads entities from a single JSON file on disk rather than a live
/// catalog. Read-only: the store never writes back to `path`.
pub struct DebugFileStore {
    path: PathBuf,
}

impl DebugFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DebugFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_snapshot(&self) -> Result<DebugSnapshot, Error> {
        let file = File::open(&self.path).map_err(|source| Error::ConfigRead {
            path: self.path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| Error::StoreUnavailable(format!("malformed snapshot at '{}': {e}", self.path.display())))
    }
}

impl EntityStore for DebugFileStore {
    fn fetch_all_tracks(&self) -> Result<Vec<Track>, Error> {
        Ok(self.read_snapshot()?.tracks)
    }

    fn fetch_all_artists(&self) -> Result<Vec<Artist>, Error> {
        Ok(self.read_snapshot()?.artists)
    }

    fn fetch_all_albums(&self) -> Result<Vec<Album>, Error> {
        Ok(self.read_snapshot()?.albums)
    }

    fn fetch_all_tags(&self) -> Result<Vec<Tag>, Error> {
        Ok(self.read_snapshot()?.tags)
    }

    fn fetch_last_tracks_listened(&self, n: usize) -> Result<Vec<Listening>, Error> {
        Ok(self.read_snapshot()?.listenings.into_iter().take(n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_entities_from_a_json_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "tracks": [{{"id": 1, "album_id": null, "artist_ids": [1]}}],
                "artists": [{{"id": 1, "similar_artist_ids": [], "tag_ids": []}}],
                "albums": [],
                "tags": [],
                "listenings": [{{"played_at": "2024-01-01T00:00:00Z", "track_id": 1}}]
            }}"#
        )
        .unwrap();

        let store = DebugFileStore::new(file.path());
        assert_eq!(store.fetch_all_tracks().unwrap().len(), 1);
        assert_eq!(store.fetch_all_artists().unwrap().len(), 1);
        assert_eq!(store.fetch_last_tracks_listened(10).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_store_unavailable() {
        let store = DebugFileStore::new("/nonexistent/path/snapshot.json");
        let err = store.fetch_all_tracks().unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
