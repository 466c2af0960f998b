use greetbot::grammar::{Label, ParseError, TRAINING_CORPUS};
use greetbot::parser::{DependencyParser, LexiconParser};

fn parser() -> LexiconParser {
    LexiconParser::train(TRAINING_CORPUS).expect("built-in corpus should train")
}

fn labels(p: &LexiconParser, text: &str) -> Vec<Label> {
    p.parse(text).unwrap().tokens().iter().map(|t| t.label).collect()
}

#[test]
fn test_training_utterances_parse_as_annotated() {
    let p = parser();
    for example in TRAINING_CORPUS {
        let graph = p.parse(example.text).unwrap();
        let heads: Vec<usize> = graph.tokens().iter().map(|t| t.head).collect();
        let got: Vec<Label> = graph.tokens().iter().map(|t| t.label).collect();
        assert_eq!(heads, example.heads, "heads differ for '{}'", example.text);
        assert_eq!(got, example.labels, "labels differ for '{}'", example.text);
    }
}

#[test]
fn test_memorized_match_ignores_case_and_spacing() {
    let p = parser();
    let graph = p.parse("  HI   THERE ").unwrap();
    let texts: Vec<&str> = graph.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["HI", "THERE"], "Original casing is kept on tokens");
    assert_eq!(graph.root().unwrap().text, "HI");
}

#[test]
fn test_majority_label_per_word() {
    let p = parser();
    assert_eq!(p.label_of("you"), Label::Target);
    assert_eq!(p.label_of("doing"), Label::State);
    assert_eq!(p.label_of("What"), Label::Root);
    assert_eq!(p.label_of("coffee"), Label::Object);
    assert_eq!(p.label_of("zebra"), Label::None);
}

#[test]
fn test_unseen_utterance_is_labeled_word_by_word() {
    let p = parser();
    let graph = p.parse("how are you doing bot").unwrap();
    assert_eq!(
        labels(&p, "how are you doing bot"),
        vec![Label::Root, Label::State, Label::Target, Label::State, Label::Target]
    );
    assert!(graph.tokens().iter().all(|t| t.head == 0), "Everything hangs off the root");
}

#[test]
fn test_unknown_words_get_a_root() {
    let p = parser();
    assert_eq!(labels(&p, "xyz"), vec![Label::Root]);
    assert_eq!(labels(&p, "toaster oven"), vec![Label::Root, Label::None]);
}

#[test]
fn test_only_first_root_candidate_is_kept() {
    let p = parser();
    let graph = p.parse("hi good morning").unwrap();
    assert_eq!(labels(&p, "hi good morning"), vec![Label::Root, Label::None, Label::None]);
    assert_eq!(graph.root().unwrap().text, "hi");
}

#[test]
fn test_empty_utterance_rejected() {
    let p = parser();
    assert_eq!(p.parse(""), Err(ParseError::EmptyUtterance));
    assert_eq!(p.parse("   \t "), Err(ParseError::EmptyUtterance));
}

#[test]
fn test_boxed_parser_delegates() {
    let boxed: Box<dyn DependencyParser> = Box::new(parser());
    assert_eq!(boxed.parse("hi").unwrap().root().unwrap().text, "hi");
}
