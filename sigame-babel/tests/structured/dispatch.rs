//! Shape dispatch through the public parser: entity types are inferred from keys.

use sigame_babel::format::Format;
use sigame_babel::formats::structured::StructuredFormat;
use sigame_babel::model::AtomKind;
use sigame_babel::FormatError;

fn wrap_round(round: &str) -> String {
    format!(r#"{{"name": "P", "rounds": [{round}]}}"#)
}

#[test]
fn test_theme_with_extra_keys_is_still_a_theme() {
    let json = wrap_round(
        r#"{"name": "R", "themes": [
            {"name": "T", "questions": [], "comment": "not a discriminator", "price": 5}
        ]}"#,
    );
    let package = StructuredFormat.parse(json.as_bytes()).unwrap();
    assert_eq!(package.rounds[0].themes[0].name, "T");
    assert!(package.rounds[0].themes[0].questions.is_empty());
}

#[test]
fn test_theme_in_rounds_position_rejected() {
    let json = r#"{"name": "P", "rounds": [{"name": "T", "questions": []}]}"#;
    let err = StructuredFormat.parse(json.as_bytes()).unwrap_err();
    assert!(matches!(err, FormatError::ParseError(_)));
}

#[test]
fn test_key_order_does_not_matter() {
    let json = wrap_round(
        r#"{"themes": [{"questions": [{"scenario": [{"time": 3, "type": "voice", "text": "@a.mp3"}],
            "answers": {"wrong": ["B"], "right": ["A"]}, "price": 400}], "name": "T"}],
            "final": true, "name": "R"}"#,
    );
    let package = StructuredFormat.parse(json.as_bytes()).unwrap();
    let round = &package.rounds[0];
    assert!(round.is_final);

    let question = &round.themes[0].questions[0];
    assert_eq!(question.price, 400);
    assert_eq!(question.right, vec!["A"]);
    assert_eq!(question.wrong, vec!["B"]);
    assert_eq!(question.scenario[0].kind, AtomKind::Voice);
    assert_eq!(question.scenario[0].time, 3);
}

#[test]
fn test_info_without_known_keys_is_empty() {
    let json = r#"{"name": "P", "rounds": [], "info": {"editor": "x"}}"#;
    let package = StructuredFormat.parse(json.as_bytes()).unwrap();
    assert!(package.info.is_empty());
}

#[test]
fn test_info_shaped_like_entity_rejected() {
    let json = r#"{"name": "P", "rounds": [], "info": {"text": "oops"}}"#;
    let err = StructuredFormat.parse(json.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("'info'"));
}

#[test]
fn test_top_level_array_rejected() {
    let err = StructuredFormat.parse(b"[]").unwrap_err();
    assert!(err.to_string().contains("an array"));
}
