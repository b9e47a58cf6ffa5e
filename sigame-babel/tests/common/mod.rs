//! Shared package and archive builders for integration tests.

#![allow(dead_code)]

use sigame_babel::model::{
    question_types, Atom, AtomKind, Info, Package, Question, QuestionType, Round, Theme,
};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// One round, one theme, one question worth 100 with a single text atom.
pub fn concrete_package() -> Package {
    let mut question = Question::new(100);
    question.scenario.push(Atom::text("What?"));
    question.right.push("Answer".to_string());

    let mut theme = Theme::new("Theme 1");
    theme.questions.push(question);

    let mut round = Round::new("Round 1");
    round.themes.push(theme);

    let mut package = Package::new("Quiz");
    package.rounds.push(round);
    package
}

/// A package that exercises every field both encodings can represent.
pub fn kitchensink_package() -> Package {
    let mut package = Package::new("Kitchen & Sink");
    package.version = 4.5;
    package.id = "6f1c2c2e-0d7a-4b1e-9d0a-2b8d1f0f9c11".to_string();
    package.restriction = "12+".to_string();
    package.publisher = "Quiz Club".to_string();
    package.difficulty = 7;
    package.logo = "@logo.png".to_string();
    package.date = "01.02.2023".to_string();
    package.language = "en".to_string();
    package.tags = vec!["geography".to_string(), "history".to_string()];
    package.info = Info {
        authors: vec!["Ann".to_string(), "Bob".to_string()],
        sources: vec!["https://example.org/quiz".to_string()],
        comments: "Line one\nline \"two\" <three>".to_string(),
    };

    let mut simple = Question::new(100);
    simple.scenario.push(Atom::text("Longest river?"));
    simple.right.push("Nile".to_string());

    let mut cat = Question::new(200);
    cat.question_type = QuestionType::new(question_types::CAT);
    cat.question_type.params.set("theme", "Lakes");
    cat.question_type.params.set("cost", "300");
    cat.scenario.push(Atom::text("Deepest lake?"));
    cat.right.push("Baikal".to_string());
    cat.wrong = vec!["Tanganyika".to_string(), String::new()];

    let mut media = Question::new(300);
    media.scenario = vec![
        Atom::with_kind("Listen", AtomKind::Say),
        Atom {
            text: "@anthem.mp3".to_string(),
            kind: AtomKind::Voice,
            time: 15,
        },
        Atom::with_kind("", AtomKind::Marker),
        Atom::with_kind("@flag.png", AtomKind::Image),
        Atom::with_kind("@clip.mp4", AtomKind::Video),
        Atom::with_kind("<b>raw</b>", AtomKind::Other("html".to_string())),
    ];
    media.right = vec!["France".to_string(), "French Republic".to_string()];
    media.info.comments = "Anthem plays for 15 seconds".to_string();

    let mut unpriced = Question::default();
    unpriced.question_type = QuestionType::new(question_types::AUCTION);
    unpriced.scenario.push(Atom::text("Bid for it"));
    unpriced.right.push("Anything".to_string());

    let mut rivers = Theme::new("Rivers & Lakes");
    rivers.info.authors.push("Theme author".to_string());
    rivers.questions = vec![simple, cat];

    let mut anthems = Theme::new("Anthems");
    anthems.questions = vec![media, unpriced];

    let mut first = Round::new("First round");
    first.info.sources.push("Atlas".to_string());
    first.themes = vec![rivers, anthems, Theme::new("Empty theme")];

    let mut last_question = Question::new(0);
    last_question.scenario.push(Atom::text("Final question"));
    last_question.right.push("Final answer".to_string());
    let mut final_theme = Theme::new("Finale");
    final_theme.questions.push(last_question);
    let mut final_round = Round::new_final("Final");
    final_round.themes.push(final_theme);

    package.rounds = vec![first, final_round, Round::new("Empty round")];
    package
}

/// Builds an in-memory zip archive from `(path, bytes)` pairs.
pub fn build_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start entry");
        writer.write_all(data).expect("write entry");
    }
    writer.finish().expect("finish archive").into_inner()
}

/// Reads every entry of an archive as `(path, bytes)`, sorted by path.
pub fn archive_entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid archive");
    let mut entries = Vec::new();
    for idx in 0..archive.len() {
        let mut file = archive.by_index(idx).expect("entry");
        let mut data = Vec::new();
        file.read_to_end(&mut data).expect("entry data");
        entries.push((file.name().to_string(), data));
    }
    entries.sort();
    entries
}

/// Returns the bytes of a single archive entry.
pub fn archive_entry(bytes: &[u8], name: &str) -> Option<Vec<u8>> {
    archive_entries(bytes)
        .into_iter()
        .find(|(path, _)| path == name)
        .map(|(_, data)| data)
}
