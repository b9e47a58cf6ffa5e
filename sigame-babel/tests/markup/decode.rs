//! Decoding hand-written markup documents.

use sigame_babel::format::Format;
use sigame_babel::formats::markup::MarkupFormat;
use sigame_babel::model::AtomKind;
use sigame_babel::FormatError;

const EDITOR_OUTPUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package name="Capitals" version="4" id="a1b2" date="05.06.2022" difficulty="3" publisher="Club" logo="@logo.jpg" xmlns="http://vladimirkhil.com/ygpackage3.0.xsd">
  <tags>
    <tag>geography</tag>
  </tags>
  <info>
    <authors>
      <author>Ann</author>
    </authors>
    <comments>Made with the editor</comments>
  </info>
  <rounds>
    <round name="Round 1">
      <themes>
        <theme name="Europe">
          <info>
            <sources>
              <source>Atlas</source>
            </sources>
          </info>
          <questions>
            <question price="100">
              <scenario>
                <atom>Capital of France?</atom>
              </scenario>
              <right>
                <answer>Paris</answer>
              </right>
            </question>
            <question price="200">
              <type name="sponsored" />
              <scenario>
                <atom type="image">@eiffel.jpg</atom>
                <atom type="say">Which city?</atom>
              </scenario>
              <right>
                <answer>Paris</answer>
              </right>
              <wrong>
                <answer>Lyon</answer>
              </wrong>
            </question>
          </questions>
        </theme>
      </themes>
    </round>
    <round name="Final" type="final">
      <themes>
        <theme name="Asia">
          <questions>
            <question price="0">
              <scenario>
                <atom>Capital of Japan?</atom>
              </scenario>
              <right>
                <answer>Tokyo</answer>
              </right>
            </question>
          </questions>
        </theme>
      </themes>
    </round>
  </rounds>
</package>"#;

#[test]
fn test_editor_document() {
    let package = MarkupFormat.parse(EDITOR_OUTPUT.as_bytes()).unwrap();

    assert_eq!(package.name, "Capitals");
    assert_eq!(package.version, 4.0);
    assert_eq!(package.difficulty, 3);
    assert_eq!(package.id, "a1b2");
    assert_eq!(package.logo, "@logo.jpg");
    assert_eq!(package.tags, vec!["geography"]);
    assert_eq!(package.info.authors, vec!["Ann"]);
    assert_eq!(package.info.comments, "Made with the editor");

    assert_eq!(package.rounds.len(), 2);
    assert!(!package.rounds[0].is_final);
    assert!(package.rounds[1].is_final);

    let europe = &package.rounds[0].themes[0];
    assert_eq!(europe.info.sources, vec!["Atlas"]);
    assert!(package.rounds[0].info.is_empty());

    let sponsored = &europe.questions[1];
    assert_eq!(sponsored.question_type.name, "sponsored");
    assert_eq!(sponsored.scenario[0].kind, AtomKind::Image);
    assert_eq!(sponsored.scenario[1].kind, AtomKind::Say);
    assert_eq!(sponsored.wrong, vec!["Lyon"]);

    assert_eq!(package.rounds[1].themes[0].questions[0].price, 0);
}

#[test]
fn test_missing_wrappers_mean_empty_sequences() {
    let xml = r#"<package name="P"><rounds><round name="R"><themes><theme name="T"><questions>
        <question price="5"><scenario/></question>
    </questions></theme></themes></round></rounds></package>"#;
    let package = MarkupFormat.parse(xml.as_bytes()).unwrap();
    let question = &package.rounds[0].themes[0].questions[0];
    assert!(question.scenario.is_empty());
    assert!(question.right.is_empty());
    assert!(question.wrong.is_empty());
}

#[test]
fn test_missing_price_is_unset() {
    let xml = r#"<package name="P"><rounds><round name="R"><themes><theme name="T"><questions>
        <question><scenario><atom>x</atom></scenario></question>
    </questions></theme></themes></round></rounds></package>"#;
    let package = MarkupFormat.parse(xml.as_bytes()).unwrap();
    assert_eq!(package.rounds[0].themes[0].questions[0].price, -1);
}

#[test]
fn test_invalid_price_fails() {
    let xml = r#"<package name="P"><rounds><round name="R"><themes><theme name="T"><questions>
        <question price="a lot"><scenario/></question>
    </questions></theme></themes></round></rounds></package>"#;
    let err = MarkupFormat.parse(xml.as_bytes()).unwrap_err();
    assert!(matches!(err, FormatError::ParseError(_)));
}

#[test]
fn test_non_utf8_fails() {
    let err = MarkupFormat.parse(&[0x3c, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, FormatError::ParseError(_)));
}
