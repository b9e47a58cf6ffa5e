//! Same-format round trips for the structured encoding.

use crate::common::{concrete_package, kitchensink_package};
use insta::assert_snapshot;
use sigame_babel::format::Format;
use sigame_babel::formats::structured::StructuredFormat;
use sigame_babel::model::{Atom, Package, Question, Round, Theme};

fn round_trip(package: &Package) -> Package {
    let json = StructuredFormat.serialize(package).expect("json to serialize");
    StructuredFormat
        .parse(json.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to re-parse {json}: {e}"))
}

#[test]
fn test_kitchensink_round_trip() {
    let package = kitchensink_package();
    assert_eq!(round_trip(&package), package);
}

#[test]
fn test_concrete_output() {
    let json = StructuredFormat.serialize(&concrete_package()).unwrap();
    assert_snapshot!(json, @r#"{"name":"Quiz","version":4.0,"id":"","difficulty":5,"rounds":[{"name":"Round 1","themes":[{"name":"Theme 1","questions":[{"price":100,"answers":{"right":["Answer"]},"scenario":[{"text":"What?"}]}]}]}]}"#);
}

#[test]
fn test_default_type_params_preserved() {
    let mut question = Question::new(100);
    question.question_type.params.set("cost", "500");
    question.question_type.params.set("theme", "Secret");
    question.scenario.push(Atom::text("Q"));
    question.right.push("A".to_string());

    let mut theme = Theme::new("T");
    theme.questions.push(question);
    let mut round = Round::new("R");
    round.themes.push(theme);
    let mut package = Package::new("P");
    package.rounds.push(round);

    let decoded = round_trip(&package);
    assert_eq!(decoded, package);
    assert!(decoded.rounds[0].themes[0].questions[0]
        .question_type
        .has_params());
}

#[test]
fn test_empty_info_omitted() {
    let json = StructuredFormat.serialize(&concrete_package()).unwrap();
    assert!(!json.contains("\"info\""));
    assert!(!json.contains("\"wrong\""));
    assert!(!json.contains("\"type\""));
    assert!(!json.contains("\"final\""));
}

#[test]
fn test_pretty_output_parses_identically() {
    let package = kitchensink_package();
    let mut options = std::collections::HashMap::new();
    options.insert("pretty".to_string(), "true".to_string());
    let json = StructuredFormat
        .serialize_with_options(&package, &options)
        .unwrap();
    assert!(json.contains('\n'));
    assert_eq!(StructuredFormat.parse(json.as_bytes()).unwrap(), package);
}
