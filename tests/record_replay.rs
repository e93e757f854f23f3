//! Record-replay round trip for project lookups.
//!
//! 1. Record lookups against an in-memory daemon stand-in.
//! 2. Replay the cassette through `ServiceContext::replaying()`.
//! 3. Assert the post-move links match, twice, for determinism.

use std::sync::{Arc, Mutex};

use slugpath::adapters::memory::StaticProjectLookup;
use slugpath::adapters::recording::RecordingProjectLookup;
use slugpath::cassette::recorder::CassetteRecorder;
use slugpath::context::ServiceContext;
use slugpath::ports::ProjectInfo;

const LOOKUPS: [(&str, &str); 3] = [
    ("/srv/data/widgets", "issues"),
    ("/home/me/scratch", "docs/readme"),
    ("/nowhere", "issues"),
];

async fn links(ctx: &ServiceContext) -> Vec<String> {
    let resolver = ctx.resolver();
    let mut out = Vec::new();
    for (path, relative) in LOOKUPS {
        out.push(resolver.link_after_relocation(path, relative).await);
    }
    out
}

#[tokio::test]
async fn record_then_replay_produces_identical_links() {
    let dir = std::env::temp_dir().join("slugpath_record_replay_test");
    let cassette_path = dir.join("lookups.cassette.yaml");

    let daemon = StaticProjectLookup::new()
        .with_project(ProjectInfo {
            path: "/srv/data/widgets".into(),
            name: "widgets".into(),
            organization_slug: Some("acme".into()),
        })
        .with_project(ProjectInfo {
            path: "/home/me/scratch".into(),
            name: "scratch".into(),
            organization_slug: None,
        });

    let recorder =
        Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "roundtrip", "memory")));
    let recording = ServiceContext::with_lookup(Box::new(RecordingProjectLookup::new(
        Box::new(daemon),
        Arc::clone(&recorder),
    )));
    let recorded = links(&recording).await;
    drop(recording);

    let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
    assert_eq!(recorder.len(), LOOKUPS.len());
    recorder.finish().expect("recording should be written");

    assert_eq!(recorded, vec!["/acme/widgets/issues", "/_/scratch/docs/readme", "/"]);

    let first = links(&ServiceContext::replaying(&cassette_path).unwrap()).await;
    let second = links(&ServiceContext::replaying(&cassette_path).unwrap()).await;
    assert_eq!(first, recorded, "replay mismatch");
    assert_eq!(first, second, "replays differ");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn exhausted_replay_degrades_to_root() {
    let dir = std::env::temp_dir().join("slugpath_record_replay_empty_test");
    let cassette_path = dir.join("empty.cassette.yaml");
    CassetteRecorder::new(&cassette_path, "empty", "memory").finish().unwrap();

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let link = ctx.resolver().link_after_relocation("/srv/data/widgets", "issues").await;
    assert_eq!(link, "/");

    let _ = std::fs::remove_dir_all(&dir);
}
