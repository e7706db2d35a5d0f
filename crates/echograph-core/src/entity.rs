//! Entity shapes supplied by the upstream entity store, and the read-only
//! contract the recommendation core requires of that store.
//!
//! The core never writes to a store and never interprets an entity's integer
//! id beyond embedding it in a [`crate::node::NodeId`] (see
//! [`NodeId::name`](crate::node::NodeId::name)). Ingestion, persistence, and
//! schema migration are out of scope for this crate; only the trait below is
//! part of the core's contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A track: one album reference, one or more artist references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub album_id: Option<u64>,
    pub artist_ids: Vec<u64>,
}

/// An album: one or more artist references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    pub artist_ids: Vec<u64>,
}

/// An artist: similar-artist references and tag references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: u64,
    pub similar_artist_ids: Vec<u64>,
    pub tag_ids: Vec<u64>,
}

/// A tag. Tags carry no outgoing references of their own; the artist→tag
/// projection on [`Artist`] is sufficient to derive tag-tag co-occurrence
/// (see `assemble_graph`'s tag edges), so a store need not hydrate a
/// tag→artists back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
}

/// One play event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listening {
    pub played_at: DateTime<Utc>,
    pub track_id: u64,
}

/// Read-only view over tracks, artists, albums, tags, and listening history
/// for a given environment.
///
/// Implementations are expected to own whatever I/O, caching, or connection
/// pooling is necessary; the core treats failures opaquely via
/// [`Error::StoreUnavailable`].
pub trait EntityStore {
    fn fetch_all_tracks(&self) -> Result<Vec<Track>, Error>;
    fn fetch_all_artists(&self) -> Result<Vec<Artist>, Error>;
    fn fetch_all_albums(&self) -> Result<Vec<Album>, Error>;
    fn fetch_all_tags(&self) -> Result<Vec<Tag>, Error>;

    /// The `n` most recently played tracks, ordered by `played_at`
    /// descending.
    fn fetch_last_tracks_listened(&self, n: usize) -> Result<Vec<Listening>, Error>;
}

/// A complete, in-process snapshot of the entity store used by tests and by
/// [`crate::recommender::Recommender`] when driven without a live catalog.
///
/// This is not a production backend: it holds everything in memory and has
/// no notion of an environment identifier beyond being constructed once per
/// query. It exists for the same reason this codebase's debug filesystem
/// store exists for its own datatypes — a fast, dependency-free stand-in for
/// exercising the pipeline above it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub tracks: Vec<Track>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub tags: Vec<Tag>,
    /// Listening history, ordered most-recent-first.
    pub listenings: Vec<Listening>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for InMemoryStore {
    fn fetch_all_tracks(&self) -> Result<Vec<Track>, Error> {
        Ok(self.tracks.clone())
    }

    fn fetch_all_artists(&self) -> Result<Vec<Artist>, Error> {
        Ok(self.artists.clone())
    }

    fn fetch_all_albums(&self) -> Result<Vec<Album>, Error> {
        Ok(self.albums.clone())
    }

    fn fetch_all_tags(&self) -> Result<Vec<Tag>, Error> {
        Ok(self.tags.clone())
    }

    fn fetch_last_tracks_listened(&self, n: usize) -> Result<Vec<Listening>, Error> {
        Ok(self.listenings.iter().take(n).cloned().collect())
    }
}
