//! Markup (`content.xml`) decoding.
//!
//! Wrapper elements such as `<rounds>` or `<authors>` are optional; only
//! direct children are considered at every level, so an `<info>` or `<tags>`
//! block belonging to a nested entity is never picked up by its ancestors.

use crate::error::FormatError;
use crate::model::{Atom, AtomKind, Info, Named, Package, Question, QuestionType, Round, Theme};
use crate::text::first_text;
use roxmltree::Node;
use std::str::FromStr;

pub fn parse_package(source: &[u8]) -> Result<Package, FormatError> {
    let text = std::str::from_utf8(source)
        .map_err(|e| FormatError::parse(format!("content.xml is not valid UTF-8: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let doc = roxmltree::Document::parse(text)
        .map_err(|e| FormatError::parse(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "package" {
        return Err(FormatError::parse(format!(
            "Root element is <{}>, expected <package>",
            root.tag_name().name()
        )));
    }

    read_package(root)
}

fn read_package(node: Node) -> Result<Package, FormatError> {
    let mut package = Package {
        name: string_attr(node, "name"),
        version: number_attr(node, "version", Package::DEFAULT_VERSION)?,
        id: string_attr(node, "id"),
        restriction: string_attr(node, "restriction"),
        date: string_attr(node, "date"),
        publisher: string_attr(node, "publisher"),
        difficulty: number_attr(node, "difficulty", Package::DEFAULT_DIFFICULTY)?,
        logo: string_attr(node, "logo"),
        language: string_attr(node, "language"),
        ..Package::default()
    };

    read_info_into(node, &mut package);

    package.tags = wrapped(node, "tags", "tag").map(first_text).collect();
    package.rounds = wrapped(node, "rounds", "round")
        .map(read_round)
        .collect::<Result<_, _>>()?;

    Ok(package)
}

fn read_round(node: Node) -> Result<Round, FormatError> {
    let mut round = Round {
        name: string_attr(node, "name"),
        is_final: node.attribute("type") == Some("final"),
        ..Round::default()
    };
    read_info_into(node, &mut round);
    round.themes = wrapped(node, "themes", "theme")
        .map(read_theme)
        .collect::<Result<_, _>>()?;
    Ok(round)
}

fn read_theme(node: Node) -> Result<Theme, FormatError> {
    let mut theme = Theme::new(string_attr(node, "name"));
    read_info_into(node, &mut theme);
    theme.questions = wrapped(node, "questions", "question")
        .map(read_question)
        .collect::<Result<_, _>>()?;
    Ok(theme)
}

fn read_question(node: Node) -> Result<Question, FormatError> {
    let mut question = Question::new(number_attr(node, "price", Question::UNSET_PRICE)?);
    read_info_into(node, &mut question);

    if let Some(type_node) = child(node, "type") {
        question.question_type = read_question_type(type_node);
    }

    let scenario = child(node, "scenario").ok_or_else(|| {
        FormatError::parse(format!(
            "<question price=\"{}\"> has no <scenario> element",
            question.price
        ))
    })?;
    question.scenario = elements(scenario, "atom")
        .map(read_atom)
        .collect::<Result<_, _>>()?;

    question.right = wrapped(node, "right", "answer").map(first_text).collect();
    question.wrong = wrapped(node, "wrong", "answer").map(first_text).collect();

    Ok(question)
}

fn read_question_type(node: Node) -> QuestionType {
    let mut question_type = match node.attribute("name") {
        Some(name) => QuestionType::new(name),
        None => QuestionType::default(),
    };
    for param in elements(node, "param") {
        question_type
            .params
            .set(string_attr(param, "name"), first_text(param));
    }
    question_type
}

fn read_atom(node: Node) -> Result<Atom, FormatError> {
    Ok(Atom {
        text: first_text(node),
        kind: AtomKind::from_tag(node.attribute("type").unwrap_or_default()),
        time: number_attr(node, "time", 0)?,
    })
}

fn read_info_into<T: Named>(node: Node, target: &mut T) {
    if let Some(info_node) = child(node, "info") {
        target.adopt_info(read_info(info_node));
    }
}

fn read_info(node: Node) -> Info {
    Info {
        authors: wrapped(node, "authors", "author").map(first_text).collect(),
        sources: wrapped(node, "sources", "source").map(first_text).collect(),
        comments: child(node, "comments").map(first_text).unwrap_or_default(),
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

fn elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}

/// Items of an optional wrapper element, e.g. `<rounds><round/>...</rounds>`.
fn wrapped<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    wrapper: &str,
    item: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    child(node, wrapper)
        .into_iter()
        .flat_map(move |w| elements(w, item))
}

fn string_attr(node: Node, attr: &str) -> String {
    node.attribute(attr).unwrap_or_default().to_string()
}

/// Absent or empty attributes fall back to `default`; anything else must parse.
fn number_attr<T: FromStr>(node: Node, attr: &str, default: T) -> Result<T, FormatError> {
    match node.attribute(attr) {
        None | Some("") => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            FormatError::parse(format!(
                "Invalid {attr} \"{raw}\" on <{}>",
                node.tag_name().name()
            ))
        }),
    }
}
