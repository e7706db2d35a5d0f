//! The closed set of authorized relations between node types.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::error::Error;
use crate::node::NodeType;

/// The closed set of relation labels an edge may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    AlbumArtist,
    TrackArtist,
    TrackAlbum,
    ArtistArtist,
    ArtistTag,
    AlbumAlbum,
    TagTag,
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RelationType::AlbumArtist => "album_artist",
            RelationType::TrackArtist => "track_artist",
            RelationType::TrackAlbum => "track_album",
            RelationType::ArtistArtist => "artist_artist",
            RelationType::ArtistTag => "artist_tag",
            RelationType::AlbumAlbum => "album_album",
            RelationType::TagTag => "tag_tag",
        };
        f.write_str(s)
    }
}

/// A relation label with its default edge weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relation {
    pub name: RelationType,
    pub default_weight: f64,
}

impl Relation {
    const fn new(name: RelationType) -> Self {
        Relation {
            name,
            default_weight: 1.0,
        }
    }
}

lazy_static! {
    /// The closed set of (source type, destination type) pairs that may be
    /// connected by an edge, order-insensitive.
    pub static ref AUTHORIZED_RELATIONS: HashMap<(NodeType, NodeType), Relation> = {
        use NodeType::*;
        let mut m = HashMap::new();
        m.insert((Album, Artist), Relation::new(RelationType::AlbumArtist));
        m.insert((Track, Artist), Relation::new(RelationType::TrackArtist));
        m.insert((Track, Album), Relation::new(RelationType::TrackAlbum));
        m.insert((Artist, Artist), Relation::new(RelationType::ArtistArtist));
        m.insert((Artist, Tag), Relation::new(RelationType::ArtistTag));
        m.insert((Album, Album), Relation::new(RelationType::AlbumAlbum));
        m.insert((Tag, Tag), Relation::new(RelationType::TagTag));
        m
    };
}

/// Look up the relation authorized between two node types, trying both
/// orderings of the pair.
pub fn relation_for(u: NodeType, v: NodeType) -> Result<Relation, Error> {
    AUTHORIZED_RELATIONS
        .get(&(u, v))
        .or_else(|| AUTHORIZED_RELATIONS.get(&(v, u)))
        .copied()
        .ok_or(Error::ForbiddenRelation(u, v))
}
