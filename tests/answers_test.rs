use std::cell::RefCell;
use std::collections::VecDeque;

use rnt::answers::get_answers;
use rnt::config::{
    Answers, PackageManager, ProjectConfig, Styling, INCLUDE_EXAMPLES, INSTALL_BACKEND,
    INSTALL_EXTRA_DEPENDENCIES, INSTALL_TESTS, PACKAGE_MANAGER, PROJECT_NAME, STYLING,
};
use rnt::error::{Error, Result};
use rnt::prompt::Prompter;
use serde_json::json;

/// Replays canned responses and records which questions were asked.
#[derive(Default)]
struct ScriptedPrompter {
    texts: RefCell<VecDeque<String>>,
    selections: RefCell<VecDeque<usize>>,
    multi_selections: RefCell<VecDeque<Vec<usize>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(texts: &[&str], selections: &[usize], multi_selections: &[&[usize]]) -> Self {
        Self {
            texts: RefCell::new(texts.iter().map(|t| t.to_string()).collect()),
            selections: RefCell::new(selections.iter().copied().collect()),
            multi_selections: RefCell::new(multi_selections.iter().map(|s| s.to_vec()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str, validate: fn(&str) -> Result<()>) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        loop {
            let answer = self.texts.borrow_mut().pop_front().expect("no scripted text left");
            if validate(&answer).is_ok() {
                return Ok(answer);
            }
        }
    }

    fn select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.selections.borrow_mut().pop_front().expect("no scripted selection left"))
    }

    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        self.asked.borrow_mut().push(prompt.to_string());
        assert_eq!(items.len(), defaults.len());
        Ok(self.multi_selections.borrow_mut().pop_front().expect("no scripted multi-select left"))
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        self.asked.borrow_mut().push(prompt);
        Ok(skip)
    }
}

fn preloaded(pairs: &[(&str, serde_json::Value)]) -> Answers {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn test_all_questions_are_asked_without_preloaded_answers() {
    // First name is rejected by validation and asked again.
    let prompt = ScriptedPrompter::new(&["My App", "my-app"], &[1, 0], &[&[0, 2]]);
    let answers = get_answers(&prompt, Answers::new()).unwrap();

    assert_eq!(prompt.asked().len(), 4);
    assert_eq!(answers.get(PROJECT_NAME), Some(&json!("my-app")));
    assert_eq!(answers.get(STYLING), Some(&json!("tailwind")));
    assert_eq!(answers.get(INCLUDE_EXAMPLES), Some(&json!(true)));
    assert_eq!(answers.get(INSTALL_TESTS), Some(&json!(true)));
    assert_eq!(answers.get(INSTALL_EXTRA_DEPENDENCIES), Some(&json!(false)));
    assert_eq!(answers.get(INSTALL_BACKEND), Some(&json!(true)));

    let config = ProjectConfig::from_answers(&answers).unwrap();
    assert_eq!(config.styling(), Styling::Tailwind);
    assert!(config.install_backend());
}

#[test]
fn test_preloaded_answers_are_not_asked() {
    let prompt = ScriptedPrompter::default();
    let answers = get_answers(
        &prompt,
        preloaded(&[
            (PACKAGE_MANAGER, json!("pnpm")),
            (PROJECT_NAME, json!("shop")),
            (STYLING, json!("styled-components")),
            (INCLUDE_EXAMPLES, json!(false)),
            (INSTALL_TESTS, json!(true)),
            (INSTALL_EXTRA_DEPENDENCIES, json!(false)),
            (INSTALL_BACKEND, json!(false)),
        ]),
    )
    .unwrap();

    assert!(prompt.asked().is_empty());
    let keys: Vec<&str> = answers.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            PROJECT_NAME,
            STYLING,
            INCLUDE_EXAMPLES,
            INSTALL_TESTS,
            INSTALL_EXTRA_DEPENDENCIES,
            INSTALL_BACKEND,
            PACKAGE_MANAGER
        ]
    );

    let config = ProjectConfig::from_answers(&answers).unwrap();
    assert_eq!(config.package_manager(), PackageManager::Pnpm);
}

#[test]
fn test_only_missing_features_are_offered() {
    let prompt = ScriptedPrompter::new(&[], &[], &[&[0]]);
    let answers = get_answers(
        &prompt,
        preloaded(&[
            (PROJECT_NAME, json!("shop")),
            (STYLING, json!("tailwind")),
            (INCLUDE_EXAMPLES, json!(true)),
            (INSTALL_TESTS, json!(false)),
        ]),
    )
    .unwrap();

    assert_eq!(prompt.asked(), vec!["Select additional features".to_string()]);
    assert_eq!(answers.get(INSTALL_TESTS), Some(&json!(false)));
    // Index 0 of the offered features is the extra libraries entry.
    assert_eq!(answers.get(INSTALL_EXTRA_DEPENDENCIES), Some(&json!(true)));
    assert_eq!(answers.get(INSTALL_BACKEND), Some(&json!(false)));
}

#[test]
fn test_null_answers_are_asked() {
    let prompt = ScriptedPrompter::new(&["shop"], &[0, 1], &[&[]]);
    let answers =
        get_answers(&prompt, preloaded(&[(PROJECT_NAME, serde_json::Value::Null)])).unwrap();

    assert_eq!(answers.get(PROJECT_NAME), Some(&json!("shop")));
    assert_eq!(answers.get(STYLING), Some(&json!("styled-components")));
    assert_eq!(answers.get(INCLUDE_EXAMPLES), Some(&json!(false)));
}

#[test]
fn test_out_of_range_selection_is_a_validation_error() {
    let prompt = ScriptedPrompter::new(&[], &[5], &[]);
    match get_answers(&prompt, preloaded(&[(PROJECT_NAME, json!("demo-app"))])) {
        Err(Error::ValidationError { field, .. }) => assert_eq!(field, STYLING),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_project_type_is_rejected() {
    let prompt = ScriptedPrompter::new(&[], &[1, 2], &[]);
    let result = get_answers(&prompt, preloaded(&[(PROJECT_NAME, json!("demo-app"))]));
    assert!(matches!(
        result,
        Err(Error::ValidationError { field, .. }) if field == INCLUDE_EXAMPLES
    ));
}
