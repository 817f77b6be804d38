//! Golden tests for the JSON reading format
//!
//! `liuyao <cast> --format json` is the machine-readable contract. These tests
//! pin its shape for a fixed cast on a fixed day.

use chrono::NaiveDate;
use liuyao::domain::{cast_manual_at, CastMethod, LineKind, NoTexts, Reading};
use liuyao::storage::Corpus;
use serde_json::Value;

/// 0001-01-11 is a Jia day
fn jia_day() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 11)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn reading_json(kinds: [LineKind; 6], with_derived: bool) -> Value {
    let hexagram = cast_manual_at(&kinds, jia_day()).unwrap();
    let reading = Reading::from_cast(CastMethod::Manual, &hexagram, &NoTexts, with_derived).unwrap();
    serde_json::to_value(&reading).unwrap()
}

#[test]
fn test_reading_top_level_keys() {
    let json = reading_json([LineKind::YoungYang; 6], true);
    let obj = json.as_object().unwrap();

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["derived", "interpretation", "method", "primary"]);
}

#[test]
fn test_primary_chart_shape() {
    let json = reading_json([LineKind::YoungYang; 6], false);
    let chart = &json["primary"];

    assert!(chart.get("derived").is_none());
    assert_eq!(chart["ruling_description"], "归魂");
    assert_eq!(chart["body_branch"], "zi");
    assert_eq!(chart["texts"].as_array().unwrap().len(), 6);
    assert_eq!(chart["texts"][0], "Yang line at position 1: firm and strong.");

    let hex = &chart["hexagram"];
    assert_eq!(hex["index"], 63);
    assert_eq!(hex["name"], "水火既济");
    assert_eq!(hex["element"], "water");
    assert_eq!(hex["upper_trigram"], "kun");
    assert_eq!(hex["day_stem"], "jia");
    assert_eq!(hex["month"], 1);
    assert_eq!(hex["day"], 11);
    assert_eq!(hex["hour"], 9);
    assert_eq!(hex["lunar"], false);
}

#[test]
fn test_annotated_line_shape() {
    let json = reading_json([LineKind::YoungYang; 6], false);
    let lines = json["primary"]["hexagram"]["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 6);

    let bottom = &lines[0];
    assert_eq!(bottom["kind"], "young_yang");
    assert_eq!(bottom["position"], 1);
    assert_eq!(bottom["stem"], "jia");
    assert_eq!(bottom["branch"], "zi");
    assert_eq!(bottom["element"], "water");
    assert_eq!(bottom["spirit"], "xuan_wu");
    assert_eq!(bottom["is_ruling"], false);

    let ruling = &lines[1];
    assert_eq!(ruling["is_ruling"], true);
    assert_eq!(ruling["branch"], "yin");
    assert_eq!(ruling["kinship"], "sibling");

    assert_eq!(lines[4]["is_mirror"], true);
    assert_eq!(lines[5]["spirit"], "qing_long");
}

#[test]
fn test_derived_order() {
    let json = reading_json(
        [
            LineKind::OldYang,
            LineKind::YoungYin,
            LineKind::YoungYang,
            LineKind::YoungYin,
            LineKind::YoungYang,
            LineKind::YoungYin,
        ],
        true,
    );

    let kinds: Vec<&str> = json["derived"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["derived"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["transformed", "hidden", "mutual", "opposite", "reversed"]);

    for chart in json["derived"].as_array().unwrap() {
        assert_eq!(chart["hexagram"]["day_stem"], "jia");
        assert!(chart["hexagram"]["lines"][0]["spirit"].is_string());
    }
}

#[test]
fn test_interpretation_shape() {
    let json = reading_json(
        [
            LineKind::OldYang,
            LineKind::YoungYang,
            LineKind::YoungYang,
            LineKind::YoungYang,
            LineKind::YoungYang,
            LineKind::YoungYang,
        ],
        true,
    );
    let interp = &json["interpretation"];

    assert_eq!(interp["figure"].as_array().unwrap().len(), 6);
    assert_eq!(interp["changing_lines"], serde_json::json!([1]));
    assert!(interp["transformed_name"].is_string());
    assert_eq!(interp["kinship"].as_array().unwrap().len(), 6);
    assert_eq!(interp["spirits"].as_array().unwrap().len(), 6);

    let verdict = &interp["verdict"];
    for key in ["ruling_is_yang", "ruling_position", "aligned", "will_change"] {
        assert!(verdict.get(key).is_some(), "verdict is missing '{key}'");
    }
}

#[test]
fn test_builtin_texts_attach_to_lines() {
    let corpus = Corpus::builtin().unwrap();
    let hexagram = cast_manual_at(&[LineKind::YoungYin; 6], jia_day()).unwrap();
    let reading = Reading::from_cast(CastMethod::Manual, &hexagram, &corpus, false).unwrap();

    assert_eq!(reading.primary.hexagram.index, 0);
    assert_eq!(reading.primary.texts[0], "初九：潜龙勿用。");
    assert!(reading.derived.is_empty());
}
