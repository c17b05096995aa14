//! Integration tests for prompt classification.

use std::io::{self, Cursor};
use std::num::NonZeroUsize;

use ask_core::{Answer, AskError, Console, InputMode, Prompt, StreamConsole};

type MemoryConsole = StreamConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> MemoryConsole {
    StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Returns (bytes consumed from input, output text).
fn finish(console: MemoryConsole) -> (u64, String) {
    let (reader, writer) = console.into_inner();
    (reader.position(), String::from_utf8(writer).unwrap())
}

fn yes_no() -> Prompt<&'static str> {
    Prompt::new("Continue? ")
        .group("affirmative", ["yes", "y"])
        .group("negative", ["no", "n"])
}

/// Console that fails the test on any I/O.
struct NoIo;

impl Console for NoIo {
    fn show_prompt(&mut self, prompt: &str) -> io::Result<()> {
        panic!("unexpected prompt: {prompt}");
    }

    fn show_line(&mut self, line: &str) -> io::Result<()> {
        panic!("unexpected output: {line}");
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        panic!("unexpected read");
    }
}

#[test]
fn matching_answer_returns_group_and_raw_text() {
    let mut io = console("Y\n");
    let answer = yes_no().ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(
        answer,
        Answer {
            group: "affirmative",
            input: "Y".to_string(),
        }
    );
    let (_, out) = finish(io);
    assert_eq!(out, "Continue? ");
}

#[test]
fn ignore_case_matches_any_case() {
    let prompt = Prompt::new("").group("affirmative", ["yes"]);
    for typed in ["YES", "yes", "Yes"] {
        let mut io = console(&format!("{typed}\n"));
        let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
        assert_eq!(answer.group, "affirmative");
        assert_eq!(answer.input, typed);
    }
}

#[test]
fn case_sensitive_rejects_other_case() {
    let prompt = Prompt::new("")
        .group("affirmative", ["yes"])
        .default_group("unknown")
        .ignore_case(false);
    let mut io = console("YES\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "unknown");
    assert_eq!(answer.input, "YES");
}

#[test]
fn collision_goes_to_last_group() {
    let prompt = Prompt::new("")
        .group("first", ["maybe", "ok"])
        .group("second", ["MAYBE"])
        .group("third", ["nope"]);
    let mut io = console("maybe\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "second");
    assert_eq!(answer.input, "maybe");

    let mut io = console("OK\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "first");
}

#[test]
fn default_is_returned_once_without_wrong_message() {
    let prompt = yes_no().default_group("unknown").wrong("Try again");
    let mut io = console("what\nyes\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "unknown");
    assert_eq!(answer.input, "what");
    let (consumed, out) = finish(io);
    assert_eq!(consumed, 5);
    assert_eq!(out, "Continue? ");
}

#[test]
fn empty_input_falls_back_to_default() {
    let prompt = yes_no().default_group("negative");
    let mut io = console("\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "negative");
    assert_eq!(answer.input, "");
}

#[test]
fn without_default_reprompts_after_wrong_message() {
    let prompt = yes_no().wrong("Try again");
    let mut io = console("what\n\nno\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "negative");
    assert_eq!(answer.input, "no");
    let (_, out) = finish(io);
    assert_eq!(
        out,
        "Continue? Try again\nContinue? Try again\nContinue? "
    );
}

#[test]
fn without_wrong_message_only_prompt_repeats() {
    let mut io = console("a\nb\ny\n");
    let answer = yes_no().ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "affirmative");
    let (_, out) = finish(io);
    assert_eq!(out, "Continue? Continue? Continue? ");
}

#[test]
fn auto_mode_returns_auto_value_without_io() {
    let prompt = yes_no().auto("X");
    let answer = prompt.ask_with(InputMode::Auto, &mut NoIo).unwrap();
    assert_eq!(
        answer,
        Answer {
            group: "X",
            input: "X".to_string(),
        }
    );
}

#[test]
fn auto_mode_ignores_default() {
    let prompt = yes_no().default_group("negative").auto("affirmative");
    let answer = prompt.ask_with(InputMode::Auto, &mut NoIo).unwrap();
    assert_eq!(answer.group, "affirmative");
}

#[test]
fn auto_mode_without_auto_value_fails() {
    let prompt = yes_no().default_group("negative");
    let err = prompt.ask_with(InputMode::Auto, &mut NoIo).unwrap_err();
    assert!(err.is_auto_value_missing());
    assert!(matches!(err, AskError::AutoValueMissing));
}

#[test]
fn auto_value_is_rendered_for_non_string_groups() {
    let prompt = Prompt::new("").group(1u8, ["one"]).auto(7u8);
    let answer = prompt.ask_with(InputMode::Auto, &mut NoIo).unwrap();
    assert_eq!(answer.group, 7);
    assert_eq!(answer.input, "7");
}

#[test]
fn end_of_input_is_reported() {
    let mut io = console("nope\n");
    let err = yes_no()
        .ask_with(InputMode::Interactive, &mut io)
        .unwrap_err();
    assert!(matches!(err, AskError::EndOfInput));

    let mut io = console("");
    let err = yes_no()
        .default_group("negative")
        .ask_with(InputMode::Interactive, &mut io)
        .unwrap_err();
    assert!(matches!(err, AskError::EndOfInput));
}

#[test]
fn max_attempts_bounds_the_retry_loop() {
    let prompt = yes_no()
        .wrong("Try again")
        .max_attempts(NonZeroUsize::new(2).unwrap());
    let mut io = console("a\nb\nyes\n");
    let err = prompt.ask_with(InputMode::Interactive, &mut io).unwrap_err();
    assert!(matches!(err, AskError::AttemptsExhausted { attempts: 2 }));
    let (consumed, out) = finish(io);
    assert_eq!(consumed, 4);
    assert_eq!(out, "Continue? Try again\nContinue? Try again\n");
}

#[test]
fn max_attempts_allows_match_within_limit() {
    let prompt = yes_no().max_attempts(NonZeroUsize::new(3).unwrap());
    let mut io = console("a\nb\nyes\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "affirmative");
}

#[test]
fn crlf_line_endings_are_stripped() {
    let mut io = console("No\r\n");
    let answer = yes_no().ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "negative");
    assert_eq!(answer.input, "No");
}

#[test]
fn whitespace_is_not_trimmed() {
    let prompt = yes_no().default_group("unknown");
    let mut io = console(" yes\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "unknown");
    assert_eq!(answer.input, " yes");
}

#[test]
fn empty_mapping_never_matches() {
    let prompt: Prompt<&str> = Prompt::new("> ").default_group("fallback");
    let mut io = console("anything\n");
    let answer = prompt.ask_with(InputMode::Interactive, &mut io).unwrap();
    assert_eq!(answer.group, "fallback");
}

#[test]
fn answer_serializes() {
    let answer = Answer {
        group: "affirmative".to_string(),
        input: "Y".to_string(),
    };
    let json = serde_json::to_string(&answer).expect("serialize answer");
    assert_eq!(json, r#"{"group":"affirmative","input":"Y"}"#);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Choice {
    Keep,
    Drop,
}

#[test]
fn interactive_works_for_groups_without_display() {
    let prompt = Prompt::new("Keep? ")
        .group(Choice::Keep, ["k", "keep"])
        .group(Choice::Drop, ["d", "drop"])
        .default_group(Choice::Keep);
    let mut io = console("DROP\n");
    let answer = prompt.ask_interactive(&mut io).unwrap();
    assert_eq!(answer.group, Choice::Drop);
    assert_eq!(answer.input, "DROP");
}
