//! Markup (`content.xml`) encoding.
//!
//! The writer emits indented tags directly. Text-bearing elements are written on a
//! single line so no indentation whitespace leaks into atom or answer text.

use crate::model::{Atom, Info, Package, Question, Round, Theme};

pub const PACKAGE_NAMESPACE: &str = "http://vladimirkhil.com/ygpackage3.0.xsd";
pub const DEFAULT_INDENT: &str = "    ";

/// Layout knobs for the markup writer.
#[derive(Debug, Clone)]
pub struct MarkupOptions {
    pub indent: String,
    pub xml_declaration: bool,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        MarkupOptions {
            indent: DEFAULT_INDENT.to_string(),
            xml_declaration: true,
        }
    }
}

type Attrs = Vec<(&'static str, String)>;

pub fn serialize_package(package: &Package, options: &MarkupOptions) -> String {
    let mut writer = XmlWriter::new(&options.indent);
    if options.xml_declaration {
        writer.out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    }

    let mut attrs: Attrs = vec![
        ("xmlns", PACKAGE_NAMESPACE.to_string()),
        ("name", package.name.clone()),
        ("version", package.version_string()),
    ];
    push_non_empty(&mut attrs, "id", &package.id);
    push_non_empty(&mut attrs, "restriction", &package.restriction);
    push_non_empty(&mut attrs, "date", &package.date);
    push_non_empty(&mut attrs, "publisher", &package.publisher);
    attrs.push(("difficulty", package.difficulty.to_string()));
    push_non_empty(&mut attrs, "logo", &package.logo);
    push_non_empty(&mut attrs, "language", &package.language);

    let has_children =
        !package.tags.is_empty() || !package.info.is_empty() || !package.rounds.is_empty();
    writer.element("package", &attrs, has_children, |w| {
        if !package.tags.is_empty() {
            w.element("tags", &[], true, |w| {
                for tag in &package.tags {
                    w.leaf("tag", &[], tag);
                }
            });
        }
        write_info(w, &package.info);
        if !package.rounds.is_empty() {
            w.element("rounds", &[], true, |w| {
                for round in &package.rounds {
                    write_round(w, round);
                }
            });
        }
    });

    writer.out
}

fn write_round(w: &mut XmlWriter, round: &Round) {
    let mut attrs: Attrs = vec![("name", round.name.clone())];
    if round.is_final {
        attrs.push(("type", "final".to_string()));
    }
    let has_children = !round.info.is_empty() || !round.themes.is_empty();
    w.element("round", &attrs, has_children, |w| {
        write_info(w, &round.info);
        if !round.themes.is_empty() {
            w.element("themes", &[], true, |w| {
                for theme in &round.themes {
                    write_theme(w, theme);
                }
            });
        }
    });
}

fn write_theme(w: &mut XmlWriter, theme: &Theme) {
    let attrs: Attrs = vec![("name", theme.name.clone())];
    let has_children = !theme.info.is_empty() || !theme.questions.is_empty();
    w.element("theme", &attrs, has_children, |w| {
        write_info(w, &theme.info);
        if !theme.questions.is_empty() {
            w.element("questions", &[], true, |w| {
                for question in &theme.questions {
                    write_question(w, question);
                }
            });
        }
    });
}

fn write_question(w: &mut XmlWriter, question: &Question) {
    let attrs: Attrs = vec![("price", question.price.to_string())];
    w.element("question", &attrs, true, |w| {
        write_info(w, &question.info);

        // Parameters of a default-named type have no markup representation.
        let question_type = &question.question_type;
        if !question_type.is_default() {
            let type_attrs: Attrs = vec![("name", question_type.name.clone())];
            w.element("type", &type_attrs, question_type.has_params(), |w| {
                for (name, value) in question_type.params.iter() {
                    w.leaf("param", &[("name", name.to_string())], value);
                }
            });
        }

        w.element("scenario", &[], !question.scenario.is_empty(), |w| {
            for atom in &question.scenario {
                write_atom(w, atom);
            }
        });

        w.element("right", &[], !question.right.is_empty(), |w| {
            for answer in &question.right {
                w.leaf("answer", &[], answer);
            }
        });

        if !question.wrong.is_empty() {
            w.element("wrong", &[], true, |w| {
                for answer in &question.wrong {
                    w.leaf("answer", &[], answer);
                }
            });
        }
    });
}

fn write_atom(w: &mut XmlWriter, atom: &Atom) {
    let mut attrs: Attrs = Vec::new();
    if atom.time != 0 {
        attrs.push(("time", atom.time.to_string()));
    }
    if !atom.kind.is_default() {
        attrs.push(("type", atom.kind.as_str().to_string()));
    }
    w.leaf("atom", &attrs, &atom.text);
}

fn write_info(w: &mut XmlWriter, info: &Info) {
    if info.is_empty() {
        return;
    }
    w.element("info", &[], true, |w| {
        if !info.authors.is_empty() {
            w.element("authors", &[], true, |w| {
                for author in &info.authors {
                    w.leaf("author", &[], author);
                }
            });
        }
        if !info.sources.is_empty() {
            w.element("sources", &[], true, |w| {
                for source in &info.sources {
                    w.leaf("source", &[], source);
                }
            });
        }
        if !info.comments.is_empty() {
            w.leaf("comments", &[], &info.comments);
        }
    });
}

fn push_non_empty(attrs: &mut Attrs, name: &'static str, value: &str) {
    if !value.is_empty() {
        attrs.push((name, value.to_string()));
    }
}

struct XmlWriter<'a> {
    out: String,
    indent: &'a str,
    depth: usize,
}

impl<'a> XmlWriter<'a> {
    fn new(indent: &'a str) -> Self {
        XmlWriter {
            out: String::new(),
            indent,
            depth: 0,
        }
    }

    fn start_line(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(self.indent);
        }
    }

    fn open_tag(&mut self, tag: &str, attrs: &[(&'static str, String)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_attr(value));
            self.out.push('"');
        }
    }

    /// Writes a container element; `body` runs one level deeper.
    fn element<F>(
        &mut self,
        tag: &str,
        attrs: &[(&'static str, String)],
        has_children: bool,
        body: F,
    ) where
        F: FnOnce(&mut Self),
    {
        self.start_line();
        self.open_tag(tag, attrs);
        if !has_children {
            self.out.push_str(" />\n");
            return;
        }
        self.out.push_str(">\n");
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.start_line();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    /// Writes a text-only element on a single line.
    fn leaf(&mut self, tag: &str, attrs: &[(&'static str, String)], text: &str) {
        self.start_line();
        self.open_tag(tag, attrs);
        if text.is_empty() {
            self.out.push_str(" />\n");
            return;
        }
        self.out.push('>');
        self.out.push_str(&escape_text(text));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

// Attribute values are whitespace-normalized by parsers unless line breaks and
// tabs are written as character references.
fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}
