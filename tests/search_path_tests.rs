mod common;

use common::fixtures::{sample_field_paths, sample_wildcard_paths};
use common::{TestResult, init_logging};
use mql::search::{SearchPath, combine, field_path, wildcard_path};
use mql::{Document, JsonMode, MqlError, Value};
use serde_json::json;

// ============================================================================
// Field paths
// ============================================================================

#[test]
fn test_field_paths_compact_to_bare_strings() -> TestResult {
    init_logging();
    for raw in sample_field_paths() {
        let path = field_path(raw)?;
        assert_eq!(path.to_compact_value(), Value::from(raw), "path {raw:?}");
        assert_eq!(path.render(), Document::new().append("path", raw));
    }
    Ok(())
}

#[test]
fn test_field_paths_reject_any_star() {
    for raw in sample_wildcard_paths().into_iter().chain(["a.**", "**"]) {
        let err = MqlError::from(field_path(raw).unwrap_err());
        assert!(err.is_invalid_argument(), "path {raw:?}");
    }
}

// ============================================================================
// Wildcard paths
// ============================================================================

#[test]
fn test_wildcard_paths_render_without_collapsing() -> TestResult {
    for raw in sample_wildcard_paths() {
        let path = wildcard_path(raw)?;
        let rendered = path.render();
        assert_eq!(rendered, Document::new().append("wildcard", raw));
        assert_eq!(path.to_compact_value(), Value::Document(rendered));
    }
    Ok(())
}

#[test]
fn test_wildcard_paths_reject_double_star_or_no_star() {
    let bad = ["a.**", "**", "a.**.b", "a.***", "a.b", "title", ""];
    for raw in bad {
        assert!(
            MqlError::from(wildcard_path(raw).unwrap_err()).is_invalid_argument(),
            "pattern {raw:?}"
        );
    }
}

// ============================================================================
// Rendering into search stages
// ============================================================================

#[test]
fn test_example_paths() -> TestResult {
    assert_eq!(field_path("a.b")?.to_compact_value(), Value::from("a.b"));
    assert_eq!(
        wildcard_path("a.*.c")?
            .to_compact_value()
            .to_extended_json(JsonMode::Relaxed),
        json!({ "wildcard": "a.*.c" })
    );
    assert!(wildcard_path("a.**").is_err());
    assert!(field_path("a.*").is_err());
    Ok(())
}

#[test]
fn test_rendering_is_repeatable() -> TestResult {
    let path: SearchPath = wildcard_path("plot.*")?.into();
    assert_eq!(path.render(), path.render());
    assert_eq!(path.to_compact_value(), path.to_compact_value());
    Ok(())
}

#[test]
fn test_text_operator_with_mixed_paths() -> TestResult {
    let paths: Vec<SearchPath> = vec![
        field_path("title")?.into(),
        field_path("plot")?.multi("english")?.into(),
        wildcard_path("cast.*")?.into(),
    ];
    let stage = Document::new().append(
        "$search",
        Document::new().append(
            "text",
            Document::new()
                .append("query", "space")
                .append("path", combine(&paths)?),
        ),
    );

    assert_eq!(
        stage.to_extended_json(JsonMode::Relaxed),
        json!({ "$search": { "text": {
            "query": "space",
            "path": [
                "title",
                { "value": "plot", "multi": "english" },
                { "wildcard": "cast.*" }
            ]
        } } })
    );
    Ok(())
}

#[test]
fn test_single_path_is_not_wrapped_in_array() -> TestResult {
    let only: SearchPath = field_path("title")?.into();
    assert_eq!(combine([&only])?, Value::from("title"));
    assert!(MqlError::from(combine(Vec::<&SearchPath>::new()).unwrap_err()).is_invalid_argument());
    Ok(())
}
