//! Integration tests for the `echograph` CLI binary.

use std::io::Write;
use std::process::Command;

fn echograph_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_echograph"))
}

#[test]
fn validate_config_accepts_the_built_in_documents() {
    let output = echograph_bin()
        .arg("validate-config")
        .output()
        .expect("failed to run echograph validate-config");

    assert!(output.status.success(), "validate-config failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("built-in markov configuration: OK"));
    assert!(stdout.contains("built-in random-walk configuration: OK"));
}

#[test]
fn validate_config_rejects_an_invalid_markov_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
markov:
  default_strategy: bad
  strategies:
    bad:
      type_transition_probabilities:
        track: {{ artist: 0.5, album: 0.4 }}
"#
    )
    .unwrap();

    let output = echograph_bin()
        .arg("validate-config")
        .arg("--markov-config")
        .arg(file.path())
        .output()
        .expect("failed to run echograph validate-config");

    assert!(!output.status.success());
}

#[test]
fn recommend_prints_track_ids_from_a_snapshot() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "tracks": [
                {{"id": 1, "album_id": null, "artist_ids": [1]}},
                {{"id": 2, "album_id": null, "artist_ids": [1]}}
            ],
            "artists": [
                {{"id": 1, "similar_artist_ids": [], "tag_ids": []}}
            ],
            "albums": [],
            "tags": [],
            "listenings": [
                {{"played_at": "2024-01-01T00:00:00Z", "track_id": 1}}
            ]
        }}"#
    )
    .unwrap();

    let output = echograph_bin()
        .arg("recommend")
        .arg(file.path())
        .arg("--n-last-listenings")
        .arg("1")
        .arg("--top-k")
        .arg("1")
        .output()
        .expect("failed to run echograph recommend");

    assert!(output.status.success(), "recommend failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "2");
}
