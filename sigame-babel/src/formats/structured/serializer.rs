//! Structured (`content.json`) encoding.
//!
//! Keys are emitted in a fixed order per entity; `serde_json` is built with
//! `preserve_order`, so the order below is the order on the wire.

use super::parser::DISCRIMINATORS;
use crate::error::FormatError;
use crate::model::{Atom, Info, Package, Question, QuestionType, Round, Theme};
use serde_json::{Map, Value};

pub fn serialize_package(package: &Package, pretty: bool) -> Result<String, FormatError> {
    check_param_names(package)?;
    let value = package_value(package);
    let encoded = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    encoded.map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// A `param` object carrying an entity discriminator would decode as that
/// entity, so such names cannot be written.
fn check_param_names(package: &Package) -> Result<(), FormatError> {
    let questions = package
        .rounds
        .iter()
        .flat_map(|round| &round.themes)
        .flat_map(|theme| &theme.questions);
    for question in questions {
        for (name, _) in question.question_type.params.iter() {
            if DISCRIMINATORS.contains(&name) {
                return Err(FormatError::SerializationError(format!(
                    "Question type parameter '{name}' is reserved in the structured format"
                )));
            }
        }
    }
    Ok(())
}

pub(crate) fn package_value(package: &Package) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), package.name.clone().into());
    map.insert("version".into(), package.version.into());
    map.insert("id".into(), package.id.clone().into());
    map.insert("difficulty".into(), package.difficulty.into());
    map.insert(
        "rounds".into(),
        package.rounds.iter().map(round_value).collect(),
    );
    insert_info(&mut map, &package.info);
    insert_non_empty(&mut map, "restriction", &package.restriction);
    insert_non_empty(&mut map, "date", &package.date);
    insert_non_empty(&mut map, "publisher", &package.publisher);
    insert_non_empty(&mut map, "logo", &package.logo);
    insert_non_empty(&mut map, "language", &package.language);
    if !package.tags.is_empty() {
        map.insert("tags".into(), strings(&package.tags));
    }
    Value::Object(map)
}

fn round_value(round: &Round) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), round.name.clone().into());
    map.insert(
        "themes".into(),
        round.themes.iter().map(theme_value).collect(),
    );
    insert_info(&mut map, &round.info);
    if round.is_final {
        map.insert("final".into(), Value::Bool(true));
    }
    Value::Object(map)
}

fn theme_value(theme: &Theme) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), theme.name.clone().into());
    map.insert(
        "questions".into(),
        theme.questions.iter().map(question_value).collect(),
    );
    insert_info(&mut map, &theme.info);
    Value::Object(map)
}

fn question_value(question: &Question) -> Value {
    let mut map = Map::new();
    map.insert("price".into(), question.price.into());

    let mut answers = Map::new();
    answers.insert("right".into(), strings(&question.right));
    if !question.wrong.is_empty() {
        answers.insert("wrong".into(), strings(&question.wrong));
    }
    map.insert("answers".into(), Value::Object(answers));

    insert_info(&mut map, &question.info);
    let question_type = &question.question_type;
    if !question_type.is_default() || question_type.has_params() {
        map.insert("type".into(), question_type_value(question_type));
    }
    map.insert(
        "scenario".into(),
        question.scenario.iter().map(atom_value).collect(),
    );
    Value::Object(map)
}

fn question_type_value(question_type: &QuestionType) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), question_type.name.clone().into());
    if question_type.has_params() {
        let params: Map<String, Value> = question_type
            .params
            .iter()
            .map(|(name, value)| (name.to_string(), Value::from(value)))
            .collect();
        map.insert("param".into(), Value::Object(params));
    }
    Value::Object(map)
}

fn atom_value(atom: &Atom) -> Value {
    let mut map = Map::new();
    map.insert("text".into(), atom.text.clone().into());
    if !atom.kind.is_default() {
        map.insert("type".into(), atom.kind.as_str().into());
    }
    if atom.time != 0 {
        map.insert("time".into(), atom.time.into());
    }
    Value::Object(map)
}

fn insert_info(map: &mut Map<String, Value>, info: &Info) {
    if info.is_empty() {
        return;
    }
    let mut info_map = Map::new();
    if !info.authors.is_empty() {
        info_map.insert("authors".into(), strings(&info.authors));
    }
    if !info.sources.is_empty() {
        info_map.insert("sources".into(), strings(&info.sources));
    }
    if !info.comments.is_empty() {
        info_map.insert("comments".into(), info.comments.clone().into());
    }
    map.insert("info".into(), Value::Object(info_map));
}

fn insert_non_empty(map: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        map.insert(key.into(), value.into());
    }
}

fn strings(items: &[String]) -> Value {
    items.iter().map(|s| Value::from(s.as_str())).collect()
}
