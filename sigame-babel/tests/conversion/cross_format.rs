//! Cross-format properties: markup → structured → markup and back.

use crate::common::{build_archive, concrete_package, kitchensink_package};
use sigame_babel::format::Format;
use sigame_babel::formats::{MarkupFormat, StructuredFormat};
use sigame_babel::model::Package;
use sigame_babel::{Document, FormatRegistry};

fn via_markup(package: &Package) -> Package {
    let xml = MarkupFormat.serialize(package).unwrap();
    MarkupFormat.parse(xml.as_bytes()).unwrap()
}

fn via_structured(package: &Package) -> Package {
    let json = StructuredFormat.serialize(package).unwrap();
    StructuredFormat.parse(json.as_bytes()).unwrap()
}

#[test]
fn test_markup_then_structured() {
    let package = kitchensink_package();
    assert_eq!(via_structured(&via_markup(&package)), package);
}

#[test]
fn test_structured_then_markup() {
    let package = kitchensink_package();
    assert_eq!(via_markup(&via_structured(&package)), package);
}

#[test]
fn test_concrete_scenario_through_archives() {
    let xml = MarkupFormat.serialize(&concrete_package()).unwrap();
    let siq = build_archive(&[("content.xml", xml.as_bytes())]);

    let doc = Document::load(siq, "siq").unwrap();
    let jsiq = doc.to_bytes("jsiq").unwrap();

    let json_doc = Document::load(jsiq, "jsiq").unwrap();
    let siq_again = json_doc.to_bytes("siq").unwrap();
    let back = Document::load(siq_again, "siq").unwrap().into_package();

    assert_eq!(back, concrete_package());
    let question = &back.rounds[0].themes[0].questions[0];
    assert_eq!(question.price, 100);
    assert!(question.info.is_empty());
    assert!(question.wrong.is_empty());
    assert!(question.question_type.is_default());
    assert!(!question.question_type.has_params());
}

#[test]
fn test_registry_conversion() {
    let registry = FormatRegistry::default();
    let xml = registry.serialize(&kitchensink_package(), "siq").unwrap();
    let package = registry.parse(xml.as_bytes(), "siq").unwrap();
    let json = registry.serialize(&package, "jsiq.zip").unwrap();
    assert_eq!(
        registry.parse(json.as_bytes(), "jsiq").unwrap(),
        kitchensink_package()
    );
}

#[test]
fn test_default_type_params_survive_only_structured() {
    let mut package = concrete_package();
    let question = &mut package.rounds[0].themes[0].questions[0];
    question.question_type.params.set("note", "kept in json");

    let structured = via_structured(&package);
    assert_eq!(structured, package);

    let markup = via_markup(&package);
    let question = &markup.rounds[0].themes[0].questions[0];
    assert!(question.question_type.is_default());
    assert!(!question.question_type.has_params());
}
