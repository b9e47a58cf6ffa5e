//! Structured (`content.json`) decoding.
//!
//! The encoding carries no type tags. Every JSON object is decoded bottom-up:
//! its members are decoded first, then the object is tested against [`SHAPES`]
//! in order and built as the first entity whose discriminator key is present.
//! Objects that match no shape stay generic [`Fields`]; the owning entity
//! consumes them by key (`info`, `answers`, `type`, `param`).
//!
//! Discriminators must stay unique to their entity: `text` only appears on
//! atoms, `scenario` only on questions, and so on up to `rounds` on packages.

use crate::error::FormatError;
use crate::model::{Atom, AtomKind, Info, Named, Package, Question, QuestionType, Round, Theme};
use serde_json::{Number, Value};

pub fn parse_package(source: &[u8]) -> Result<Package, FormatError> {
    let source = source.strip_prefix(b"\xef\xbb\xbf").unwrap_or(source);
    let value: Value = serde_json::from_slice(source)
        .map_err(|e| FormatError::parse(format!("JSON parsing error: {e}")))?;

    match decode(value)? {
        Node::Package(package) => Ok(package),
        other => Err(FormatError::parse(format!(
            "Top-level value is {}, expected a package",
            other.describe()
        ))),
    }
}

/// A JSON value after shape dispatch.
#[derive(Debug)]
enum Node {
    Atom(Atom),
    Question(Question),
    Theme(Theme),
    Round(Round),
    Package(Package),
    Object(Fields),
    Array(Vec<Node>),
    Scalar(Value),
}

impl Node {
    fn describe(&self) -> &'static str {
        match self {
            Node::Atom(_) => "an atom",
            Node::Question(_) => "a question",
            Node::Theme(_) => "a theme",
            Node::Round(_) => "a round",
            Node::Package(_) => "a package",
            Node::Object(_) => "a plain object",
            Node::Array(_) => "an array",
            Node::Scalar(Value::String(_)) => "a string",
            Node::Scalar(Value::Number(_)) => "a number",
            Node::Scalar(Value::Bool(_)) => "a boolean",
            Node::Scalar(_) => "null",
        }
    }
}

/// Decoded members of an object that has not (yet) been claimed by a shape.
#[derive(Debug, Default)]
struct Fields {
    entries: Vec<(String, Node)>,
}

/// Keys whose presence makes an object decode as an entity, in [`SHAPES`] order.
pub(crate) const DISCRIMINATORS: [&str; 5] =
    ["text", "scenario", "questions", "themes", "rounds"];

struct Shape {
    matches: fn(&Fields) -> bool,
    build: fn(Fields) -> Result<Node, FormatError>,
}

/// Candidate entities, most specific first.
const SHAPES: [Shape; 5] = [
    Shape {
        matches: is_atom,
        build: build_atom,
    },
    Shape {
        matches: is_question,
        build: build_question,
    },
    Shape {
        matches: is_theme,
        build: build_theme,
    },
    Shape {
        matches: is_round,
        build: build_round,
    },
    Shape {
        matches: is_package,
        build: build_package,
    },
];

fn decode(value: Value) -> Result<Node, FormatError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Array),
        Value::Object(map) => {
            let mut fields = Fields::default();
            for (key, member) in map {
                fields.entries.push((key, decode(member)?));
            }
            dispatch(fields)
        }
        scalar => Ok(Node::Scalar(scalar)),
    }
}

fn dispatch(fields: Fields) -> Result<Node, FormatError> {
    match SHAPES.iter().find(|shape| (shape.matches)(&fields)) {
        Some(shape) => (shape.build)(fields),
        None => Ok(Node::Object(fields)),
    }
}

fn is_atom(fields: &Fields) -> bool {
    fields.contains(DISCRIMINATORS[0])
}

fn is_question(fields: &Fields) -> bool {
    fields.contains(DISCRIMINATORS[1])
}

fn is_theme(fields: &Fields) -> bool {
    fields.contains(DISCRIMINATORS[2])
}

fn is_round(fields: &Fields) -> bool {
    fields.contains(DISCRIMINATORS[3])
}

fn is_package(fields: &Fields) -> bool {
    fields.contains(DISCRIMINATORS[4])
}

fn build_atom(mut fields: Fields) -> Result<Node, FormatError> {
    let kind = fields.optional_string("type", "atom")?.unwrap_or_default();
    Ok(Node::Atom(Atom {
        text: fields.required_string("text", "atom")?,
        kind: AtomKind::from_tag(&kind),
        time: fields.optional_int("time", "atom")?.unwrap_or(0),
    }))
}

fn build_question(mut fields: Fields) -> Result<Node, FormatError> {
    let mut question = Question::new(fields.required_int("price", "question")?);
    adopt_info(&mut fields, &mut question)?;

    if let Some(node) = fields.take("type") {
        question.question_type = read_question_type(node)?;
    }

    question.scenario = fields.entity_list("scenario", "question", |node| match node {
        Node::Atom(atom) => Some(atom),
        _ => None,
    })?;

    let mut answers = fields
        .take("answers")
        .ok_or_else(|| missing("answers", "question"))
        .and_then(|node| into_object(node, "question.answers"))?;
    question.right = answers
        .string_list("right", "answers")?
        .ok_or_else(|| missing("right", "answers"))?;
    question.wrong = answers.string_list("wrong", "answers")?.unwrap_or_default();

    Ok(Node::Question(question))
}

fn build_theme(mut fields: Fields) -> Result<Node, FormatError> {
    let mut theme = Theme::new(fields.required_string("name", "theme")?);
    adopt_info(&mut fields, &mut theme)?;
    theme.questions = fields.entity_list("questions", "theme", |node| match node {
        Node::Question(question) => Some(question),
        _ => None,
    })?;
    Ok(Node::Theme(theme))
}

fn build_round(mut fields: Fields) -> Result<Node, FormatError> {
    let mut round = Round::new(fields.required_string("name", "round")?);
    round.is_final = fields.optional_bool("final", "round")?.unwrap_or(false);
    adopt_info(&mut fields, &mut round)?;
    round.themes = fields.entity_list("themes", "round", |node| match node {
        Node::Theme(theme) => Some(theme),
        _ => None,
    })?;
    Ok(Node::Round(round))
}

fn build_package(mut fields: Fields) -> Result<Node, FormatError> {
    let entity = "package";
    let mut package = Package::new(fields.required_string("name", entity)?);
    if let Some(version) = fields.optional_f64("version", entity)? {
        package.version = version;
    }
    if let Some(difficulty) = fields.optional_int("difficulty", entity)? {
        package.difficulty = difficulty;
    }
    package.id = fields.optional_string("id", entity)?.unwrap_or_default();
    package.restriction = fields
        .optional_string("restriction", entity)?
        .unwrap_or_default();
    package.publisher = fields
        .optional_string("publisher", entity)?
        .unwrap_or_default();
    package.logo = fields.optional_string("logo", entity)?.unwrap_or_default();
    package.date = fields.optional_string("date", entity)?.unwrap_or_default();
    package.language = fields
        .optional_string("language", entity)?
        .unwrap_or_default();
    package.tags = fields.string_list("tags", entity)?.unwrap_or_default();
    adopt_info(&mut fields, &mut package)?;
    package.rounds = fields.entity_list("rounds", entity, |node| match node {
        Node::Round(round) => Some(round),
        _ => None,
    })?;
    Ok(Node::Package(package))
}

fn adopt_info<T: Named>(fields: &mut Fields, target: &mut T) -> Result<(), FormatError> {
    let Some(node) = fields.take("info") else {
        return Ok(());
    };
    let mut info_fields = into_object(node, "info")?;
    target.adopt_info(Info {
        authors: info_fields
            .string_list("authors", "info")?
            .unwrap_or_default(),
        sources: info_fields
            .string_list("sources", "info")?
            .unwrap_or_default(),
        comments: info_fields
            .optional_string("comments", "info")?
            .unwrap_or_default(),
    });
    Ok(())
}

fn read_question_type(node: Node) -> Result<QuestionType, FormatError> {
    let mut fields = into_object(node, "question.type")?;
    let mut question_type = QuestionType::new(fields.required_string("name", "type")?);
    if let Some(param_node) = fields.take("param") {
        let params = into_object(param_node, "type.param")?;
        for (name, value) in params.entries {
            match value {
                Node::Scalar(Value::String(value)) => question_type.params.set(name, value),
                other => {
                    return Err(FormatError::parse(format!(
                        "Parameter '{name}' must be a string, found {}",
                        other.describe()
                    )))
                }
            }
        }
    }
    Ok(question_type)
}

fn into_object(node: Node, context: &str) -> Result<Fields, FormatError> {
    match node {
        Node::Object(fields) => Ok(fields),
        other => Err(FormatError::parse(format!(
            "Expected a plain object for '{context}', found {}",
            other.describe()
        ))),
    }
}

fn missing(key: &str, entity: &str) -> FormatError {
    FormatError::parse(format!("Missing required key '{key}' in {entity}"))
}

fn wrong_type(key: &str, entity: &str, expected: &str, found: &Node) -> FormatError {
    FormatError::parse(format!(
        "Key '{key}' in {entity} must be {expected}, found {}",
        found.describe()
    ))
}

impl Fields {
    fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    fn take(&mut self, key: &str) -> Option<Node> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    fn optional_string(&mut self, key: &str, entity: &str) -> Result<Option<String>, FormatError> {
        match self.take(key) {
            None => Ok(None),
            Some(Node::Scalar(Value::String(s))) => Ok(Some(s)),
            Some(other) => Err(wrong_type(key, entity, "a string", &other)),
        }
    }

    fn required_string(&mut self, key: &str, entity: &str) -> Result<String, FormatError> {
        self.optional_string(key, entity)?
            .ok_or_else(|| missing(key, entity))
    }

    fn optional_number(&mut self, key: &str, entity: &str) -> Result<Option<Number>, FormatError> {
        match self.take(key) {
            None => Ok(None),
            Some(Node::Scalar(Value::Number(n))) => Ok(Some(n)),
            Some(other) => Err(wrong_type(key, entity, "a number", &other)),
        }
    }

    fn optional_int(&mut self, key: &str, entity: &str) -> Result<Option<i32>, FormatError> {
        let Some(number) = self.optional_number(key, entity)? else {
            return Ok(None);
        };
        number
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                FormatError::parse(format!(
                    "Key '{key}' in {entity} must be an integer, found {number}"
                ))
            })
    }

    fn required_int(&mut self, key: &str, entity: &str) -> Result<i32, FormatError> {
        self.optional_int(key, entity)?
            .ok_or_else(|| missing(key, entity))
    }

    fn optional_f64(&mut self, key: &str, entity: &str) -> Result<Option<f64>, FormatError> {
        Ok(self.optional_number(key, entity)?.and_then(|n| n.as_f64()))
    }

    fn optional_bool(&mut self, key: &str, entity: &str) -> Result<Option<bool>, FormatError> {
        match self.take(key) {
            None => Ok(None),
            Some(Node::Scalar(Value::Bool(b))) => Ok(Some(b)),
            Some(other) => Err(wrong_type(key, entity, "a boolean", &other)),
        }
    }

    fn string_list(&mut self, key: &str, entity: &str) -> Result<Option<Vec<String>>, FormatError> {
        match self.take(key) {
            None => Ok(None),
            Some(Node::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Node::Scalar(Value::String(s)) => Ok(s),
                    other => Err(wrong_type(key, entity, "an array of strings", &other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(wrong_type(key, entity, "an array", &other)),
        }
    }

    /// Takes a required array whose items must all decode to the entity `pick` accepts.
    fn entity_list<T>(
        &mut self,
        key: &str,
        entity: &str,
        pick: impl Fn(Node) -> Option<T>,
    ) -> Result<Vec<T>, FormatError> {
        let items = match self.take(key) {
            Some(Node::Array(items)) => items,
            Some(other) => return Err(wrong_type(key, entity, "an array", &other)),
            None => return Err(missing(key, entity)),
        };
        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                let found = item.describe();
                pick(item).ok_or_else(|| {
                    FormatError::parse(format!("Item {idx} of '{key}' in {entity} is {found}"))
                })
            })
            .collect()
    }
}
