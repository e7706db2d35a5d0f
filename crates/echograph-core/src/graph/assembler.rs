//! Materializes the heterogeneous listening graph from normalized entities.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::entity::{Album, Artist, Tag, Track};
use crate::error::Error;
use crate::node::{NodeId, NodeType};

use super::builder::Graph;

/// All unordered pairs from a slice, preserving relative order of the
/// first-seen element in each pair. Order does not affect the resulting
/// undirected edge set.
fn combinations<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    (0..items.len()).flat_map(move |i| ((i + 1)..items.len()).map(move |j| (items[i], items[j])))
}

fn add_nodes(graph: &mut Graph, node_type: NodeType, ids: impl IntoIterator<Item = u64>) {
    for id in ids {
        graph.emplace(NodeId::new(node_type, id));
    }
}

/// Build the graph's node set: one node per track, artist, album, and tag,
/// in that order. This is the order [`crate::index::NodeIndex`] later
/// assigns positions in, which is what makes ranking tie-breaks
/// reproducible.
fn assemble_nodes(graph: &mut Graph, tracks: &[Track], artists: &[Artist], albums: &[Album], tags: &[Tag]) {
    add_nodes(graph, NodeType::Track, tracks.iter().map(|t| t.id));
    add_nodes(graph, NodeType::Artist, artists.iter().map(|a| a.id));
    add_nodes(graph, NodeType::Album, albums.iter().map(|a| a.id));
    add_nodes(graph, NodeType::Tag, tags.iter().map(|t| t.id));
}

/// `(ALBUM, ARTIST)` edges plus induced `(ALBUM, ALBUM)` edges for albums
/// sharing an artist.
fn add_album_edges(graph: &mut Graph, albums: &[Album]) -> Result<(), Error> {
    let mut artist_to_albums: HashMap<u64, Vec<u64>> = HashMap::new();

    for album in albums {
        let album_node = NodeId::new(NodeType::Album, album.id);
        for &artist_id in &album.artist_ids {
            let artist_node = NodeId::new(NodeType::Artist, artist_id);
            if !graph.contains(artist_node) {
                warn!(album = album.id, artist = artist_id, "album references unknown artist, skipping edge");
                continue;
            }
            graph.add_edge(album_node, artist_node, None)?;
            artist_to_albums.entry(artist_id).or_default().push(album.id);
        }
    }

    for (_, album_ids) in artist_to_albums {
        for (a, b) in combinations(&album_ids) {
            graph.add_edge(
                NodeId::new(NodeType::Album, a),
                NodeId::new(NodeType::Album, b),
                None,
            )?;
        }
    }

    Ok(())
}

/// `(TRACK, ARTIST)` and `(TRACK, ALBUM)` edges.
fn add_track_edges(graph: &mut Graph, tracks: &[Track]) -> Result<(), Error> {
    for track in tracks {
        let track_node = NodeId::new(NodeType::Track, track.id);

        for &artist_id in &track.artist_ids {
            let artist_node = NodeId::new(NodeType::Artist, artist_id);
            if !graph.contains(artist_node) {
                warn!(track = track.id, artist = artist_id, "track references unknown artist, skipping edge");
                continue;
            }
            graph.add_edge(track_node, artist_node, None)?;
        }

        if let Some(album_id) = track.album_id {
            let album_node = NodeId::new(NodeType::Album, album_id);
            if graph.contains(album_node) {
                graph.add_edge(track_node, album_node, None)?;
            } else {
                warn!(track = track.id, album = album_id, "track references unknown album, skipping edge");
            }
        }
    }

    Ok(())
}

/// `(ARTIST, ARTIST)` similar-artist edges and `(ARTIST, TAG)` edges.
fn add_artist_edges(graph: &mut Graph, artists: &[Artist]) -> Result<(), Error> {
    for artist in artists {
        let artist_node = NodeId::new(NodeType::Artist, artist.id);

        for &similar_id in &artist.similar_artist_ids {
            let similar_node = NodeId::new(NodeType::Artist, similar_id);
            if !graph.contains(similar_node) {
                warn!(artist = artist.id, similar = similar_id, "unknown similar artist, skipping edge");
                continue;
            }
            graph.add_edge(artist_node, similar_node, None)?;
        }

        for &tag_id in &artist.tag_ids {
            let tag_node = NodeId::new(NodeType::Tag, tag_id);
            if !graph.contains(tag_node) {
                warn!(artist = artist.id, tag = tag_id, "unknown tag, skipping edge");
                continue;
            }
            graph.add_edge(artist_node, tag_node, None)?;
        }
    }

    Ok(())
}

/// Induced `(TAG, TAG)` edges for tags sharing an artist.
///
/// Built from the artist→tags projection on [`Artist`] rather than from a
/// tag→artists back-reference, so a bare `Tag { id }` with no relations of
/// its own is sufficient input (see SPEC_FULL.md §4.8).
fn add_tag_edges(graph: &mut Graph, artists: &[Artist]) -> Result<(), Error> {
    for artist in artists {
        for (a, b) in combinations(&artist.tag_ids) {
            let ta = NodeId::new(NodeType::Tag, a);
            let tb = NodeId::new(NodeType::Tag, b);
            if !graph.contains(ta) || !graph.contains(tb) {
                continue;
            }
            graph.add_edge(ta, tb, None)?;
        }
    }

    Ok(())
}

/// Materialize the heterogeneous listening graph from normalized entities.
///
/// Idempotent and deterministic given the same inputs: assembling twice
/// yields identical node and edge sets. Succeeds with an empty graph if all
/// input slices are empty. A cross-reference to an entity absent from its
/// corresponding slice is silently ignored rather than treated as an error.
pub fn assemble_graph(
    tracks: &[Track],
    artists: &[Artist],
    albums: &[Album],
    tags: &[Tag],
) -> Result<Graph, Error> {
    let mut graph = Graph::new();

    assemble_nodes(&mut graph, tracks, artists, albums, tags);
    add_album_edges(&mut graph, albums)?;
    add_track_edges(&mut graph, tracks)?;
    add_artist_edges(&mut graph, artists)?;
    add_tag_edges(&mut graph, artists)?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "assembled listening graph"
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType::*;

    fn track(id: u64, album_id: Option<u64>, artist_ids: &[u64]) -> Track {
        Track {
            id,
            album_id,
            artist_ids: artist_ids.to_vec(),
        }
    }

    fn artist(id: u64, similar: &[u64], tags: &[u64]) -> Artist {
        Artist {
            id,
            similar_artist_ids: similar.to_vec(),
            tag_ids: tags.to_vec(),
        }
    }

    #[test]
    fn empty_inputs_produce_empty_graph() {
        let g = assemble_graph(&[], &[], &[], &[]).unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn is_idempotent_across_runs() {
        let tracks = vec![track(1, Some(1), &[1]), track(2, Some(1), &[1])];
        let artists = vec![artist(1, &[], &[])];
        let albums = vec![Album {
            id: 1,
            artist_ids: vec![1],
        }];
        let tags = vec![];

        let g1 = assemble_graph(&tracks, &artists, &albums, &tags).unwrap();
        let g2 = assemble_graph(&tracks, &artists, &albums, &tags).unwrap();
        assert_eq!(g1.node_count(), g2.node_count());
        assert_eq!(g1.edge_count(), g2.edge_count());
    }

    #[test]
    fn album_album_edge_requires_shared_artist() {
        let artists = vec![artist(1, &[], &[])];
        let albums = vec![
            Album {
                id: 1,
                artist_ids: vec![1],
            },
            Album {
                id: 2,
                artist_ids: vec![1],
            },
        ];
        let g = assemble_graph(&[], &artists, &albums, &[]).unwrap();
        let a1 = g.index_of(NodeId::new(Album, 1)).unwrap();
        let a2 = g.index_of(NodeId::new(Album, 2)).unwrap();
        assert!(g.neighbors(a1).any(|n| n == a2));
    }

    #[test]
    fn missing_cross_reference_is_silently_ignored() {
        let tracks = vec![track(1, Some(99), &[])];
        let g = assemble_graph(&tracks, &[], &[], &[]).unwrap();
        // Only the track node exists; no album:99 node was materialized.
        assert_eq!(g.node_count(), 1);
        assert!(g.index_of(NodeId::new(Album, 99)).is_none());
    }

    #[test]
    fn tag_tag_edge_requires_shared_artist() {
        let artists = vec![artist(1, &[], &[1, 2])];
        let tags = vec![Tag { id: 1 }, Tag { id: 2 }];
        let g = assemble_graph(&[], &artists, &[], &tags).unwrap();
        let t1 = g.index_of(NodeId::new(Tag, 1)).unwrap();
        let t2 = g.index_of(NodeId::new(Tag, 2)).unwrap();
        assert!(g.neighbors(t1).any(|n| n == t2));
    }
}
