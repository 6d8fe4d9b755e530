//! Batch job tests against real files.
//!
//! - Index job: output shape, formatting, failure leaves no output
//! - Build job: overlay merge order, skipped overlays, version data merge,
//!   per-catalog key removal and sorting

use std::fs;
use std::path::Path;

use ccg_versions::batch::{build_catalog, read_json, run_build, run_index, BuildJob, IndexJob};
use ccg_versions::Error;
use serde_json::json;

fn write(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_index_job_writes_pretty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("website/data/cards_ja.json");
    let output = dir.path().join("data/cards_ja.additional2.json");
    write(
        &input,
        r#"{"SV1-001": {"card_id": "C1", "name": "ピカチュウ"}, "SV2-001": {"card_id": "C2"}}"#,
    );

    let summary = run_index(&IndexJob::new(&input, &output)).unwrap();
    assert_eq!(summary.printings, 2);
    assert_eq!(summary.cards, 2);
    assert_eq!(summary.annotations, 2);

    let text = fs::read_to_string(&output).unwrap();
    let expected = r#"{
  "SV1-001": {
    "is_primary": true,
    "card_id": "C1",
    "other_versions": []
  },
  "SV2-001": {
    "is_primary": true,
    "card_id": "C2",
    "other_versions": []
  }
}
"#;
    assert_eq!(text, expected);
}

#[test]
fn test_index_job_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cards.json");
    let output = dir.path().join("out.json");
    write(
        &input,
        r#"{"b": {"card_id": 1}, "a": {"card_id": 1}, "c": {"card_id": "x"}}"#,
    );

    let job = IndexJob::new(&input, &output);
    run_index(&job).unwrap();
    let first = fs::read(&output).unwrap();
    run_index(&job).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_index_job_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cards.json");
    let output = dir.path().join("out.json");
    write(&input, r#"{"SV1-002": {"card_id": "C"}, "SV1-001": {"card_id": "C"}}"#);

    run_index(&IndexJob::new(&input, &output).sorted()).unwrap();

    let value = read_json(&output).unwrap();
    assert_eq!(value["SV1-001"]["is_primary"], json!(true));
    assert_eq!(value["SV1-002"]["is_primary"], json!(false));
}

#[test]
fn test_index_job_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    let result = run_index(&IndexJob::new(dir.path().join("nope.json"), &output));
    assert!(matches!(result, Err(Error::InputNotFound { .. })));
    assert!(!output.exists());
}

#[test]
fn test_index_job_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cards.json");
    let output = dir.path().join("out.json");
    write(&input, "{\"SV1-001\": {\"card_id\": ");

    let result = run_index(&IndexJob::new(&input, &output));
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
    assert!(!output.exists());
}

#[test]
fn test_index_job_missing_card_id_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cards.json");
    let output = dir.path().join("out.json");
    write(&output, "previous");
    write(&input, r#"{"ok": {"card_id": "C"}, "bad": {"name": "n"}}"#);

    match run_index(&IndexJob::new(&input, &output)) {
        Err(Error::MissingCardId { key }) => assert_eq!(key, "bad"),
        other => panic!("expected MissingCardId, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_build_merges_overlays_then_versions() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let out = dir.path().join("site/data");

    write(
        &data.join("cards_ja.json"),
        r#"{"SV1-001": {"card_id": "C1", "tags": ["a"]}, "SV1-002": {"name": "no id yet"}}"#,
    );
    // Overlay 1 supplies the missing id; overlay 2 runs after it.
    write(
        &data.join("cards_ja.additional1.json"),
        r#"{"SV1-002": {"card_id": "C1"}, "SV1-001": {"tags": ["b"]}}"#,
    );
    write(
        &data.join("cards_ja.additional2.json"),
        r#"{"SV2-001": {"card_id": "C2"}}"#,
    );

    let job = BuildJob::new(&data, &out).with_catalogs(["cards_ja"]);
    let report = build_catalog(&job, "cards_ja").unwrap();

    assert_eq!(report.overlays_applied.len(), 2);
    assert!(report.overlays_skipped.is_empty());
    assert_eq!(report.records, 3);
    assert_eq!(report.versions.map(|s| s.cards), Some(2));

    let merged = read_json(&out.join("cards_ja.json")).unwrap();
    assert_eq!(
        merged,
        json!({
            "SV1-001": {
                "card_id": "C1",
                "tags": ["a", "b"],
                "is_primary": true,
                "other_versions": ["SV1-002"]
            },
            "SV1-002": {
                "name": "no id yet",
                "card_id": "C1",
                "is_primary": false,
                "other_versions": ["SV1-001"]
            },
            "SV2-001": {
                "card_id": "C2",
                "is_primary": true,
                "other_versions": []
            }
        })
    );
}

#[test]
fn test_build_skips_broken_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let out = dir.path().join("out");

    write(&data.join("types_ja.json"), r#"{"types.1": "ポケモン"}"#);
    write(&data.join("types_ja.additional1.json"), "{broken");
    write(&data.join("types_ja.additional2.json"), r#"{"types.2": "トレーナーズ"}"#);

    let job = BuildJob::new(&data, &out).with_catalogs(["types_ja"]);
    let reports = run_build(&job).unwrap();

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.overlays_skipped.len(), 1);
    assert_eq!(report.overlays_applied.len(), 1);
    assert!(report.versions.is_none());

    let text = fs::read_to_string(out.join("types_ja.json")).unwrap();
    assert_eq!(text, r#"{"types.1":"ポケモン","types.2":"トレーナーズ"}"#);
}

#[test]
fn test_build_missing_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();

    let job = BuildJob::new(&data, dir.path().join("out")).with_catalogs(["colors_ja"]);
    assert!(matches!(run_build(&job), Err(Error::InputNotFound { .. })));
}

#[test]
fn test_build_sorts_products_and_drops_promo_key() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let out = dir.path().join("out");
    write(
        &data.join("products_ja.json"),
        r#"{"products.b": 1, "products.PRカード": 2, "products.a": 3}"#,
    );

    let job = BuildJob::new(&data, &out);
    build_catalog(&job, "products_ja").unwrap();

    let text = fs::read_to_string(out.join("products_ja.json")).unwrap();
    assert_eq!(text, r#"{"products.a":3,"products.b":1}"#);
}

#[test]
fn test_build_drops_null_type() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let out = dir.path().join("out");
    write(
        &data.join("types_ja.json"),
        r#"{"types.2": "トレーナーズ", "types.null": null, "types.1": "ポケモン"}"#,
    );

    let report = build_catalog(&BuildJob::new(&data, &out), "types_ja").unwrap();
    assert_eq!(report.records, 2);

    // Removal only; types keep their merged order.
    let text = fs::read_to_string(out.join("types_ja.json")).unwrap();
    assert_eq!(text, r#"{"types.2":"トレーナーズ","types.1":"ポケモン"}"#);
}

#[test]
fn test_build_without_cleanup_keeps_everything() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let out = dir.path().join("out");
    write(
        &data.join("products_ja.json"),
        r#"{"products.b": 1, "products.PRカード": 2}"#,
    );

    let job = BuildJob::new(&data, &out).without_cleanup();
    build_catalog(&job, "products_ja").unwrap();

    let text = fs::read_to_string(out.join("products_ja.json")).unwrap();
    assert_eq!(text, r#"{"products.b":1,"products.PRカード":2}"#);
}

/// A version index left in the data directory is picked up as an overlay;
/// the rebuilt version data replaces it instead of doubling the lists.
#[test]
fn test_build_replaces_existing_version_data() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let out = dir.path().join("out");
    let cards = r#"{"SV1-001": {"card_id": "C1"}, "SV1-002": {"card_id": "C1"}}"#;
    write(&data.join("cards_ja.json"), cards);

    run_index(&IndexJob::new(
        data.join("cards_ja.json"),
        data.join("cards_ja.additional2.json"),
    ))
    .unwrap();

    let job = BuildJob::new(&data, &out).with_catalogs(["cards_ja"]);
    let report = build_catalog(&job, "cards_ja").unwrap();
    assert_eq!(report.overlays_applied.len(), 1);

    let merged = read_json(&out.join("cards_ja.json")).unwrap();
    assert_eq!(merged["SV1-001"]["other_versions"], json!(["SV1-002"]));
    assert_eq!(merged["SV1-002"]["other_versions"], json!(["SV1-001"]));
    assert_eq!(merged["SV1-002"]["is_primary"], json!(false));
}
