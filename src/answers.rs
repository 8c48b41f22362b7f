//! Answer collection.
//! Answers can be preloaded (stdin, command-line arguments) and the remaining
//! questions are asked interactively. The result is a raw [`Answers`] map that
//! [`crate::config::ProjectConfig::from_answers`] validates.

use std::io::Read;

use log::debug;

use crate::config::{
    validate_project_name, Answers, INCLUDE_EXAMPLES, INSTALL_BACKEND,
    INSTALL_EXTRA_DEPENDENCIES, INSTALL_TESTS, PROJECT_NAME, STYLING,
};
use crate::error::{Error, Result};
use crate::prompt::Prompter;

#[derive(Debug)]
pub enum AnswerSource {
    Stdin,
    None,
}

/// Styling choices as shown to the operator, paired with their answer values.
const STYLING_CHOICES: [(&str, &str); 2] =
    [("Styled Components", "styled-components"), ("Tailwind CSS", "tailwind")];

const PROJECT_TYPES: [&str; 2] =
    ["Complete (example pages and components)", "Clean (minimal structure, no examples)"];

/// Optional features asked as one multi-select: answer key, label, default.
const FEATURES: [(&str, &str, bool); 3] = [
    (INSTALL_TESTS, "Jest and Testing Library", true),
    (
        INSTALL_EXTRA_DEPENDENCIES,
        "Extra libraries (Formik, Yup, IMask, Framer Motion, ...)",
        true,
    ),
    (INSTALL_BACKEND, "Backend (Prisma, JWT auth, shop API with Stripe and Resend)", false),
];

/// Parses preloaded answers: a JSON object, or YAML mapping as a fallback.
/// Blank input means no preloaded answers.
///
/// # Errors
/// * `Error::AnswersError` if `content` is neither a JSON object nor a YAML mapping
pub fn parse_answers(content: &str) -> Result<Answers> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Answers::new());
    }

    match serde_json::from_str::<Answers>(content) {
        Ok(answers) => Ok(answers),
        Err(json_err) => {
            debug!("Answers are not a JSON object ({json_err}), trying YAML.");
            serde_yaml::from_str::<Answers>(content).map_err(|yaml_err| {
                Error::AnswersError(format!(
                    "expected a JSON object or YAML mapping ({yaml_err})"
                ))
            })
        }
    }
}

pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Looks up the item a prompter selected, rejecting positions outside `choices`.
fn chosen<T: Copy>(field: &str, choices: &[T], index: usize) -> Result<T> {
    choices.get(index).copied().ok_or_else(|| {
        let reason = format!("selection {index} is not one of the {} choices", choices.len());
        Error::validation(field, reason)
    })
}

pub fn get_answers_from(take_from_stdin: bool) -> Result<Answers> {
    let answers_source = if take_from_stdin { AnswerSource::Stdin } else { AnswerSource::None };

    match answers_source {
        AnswerSource::Stdin => load_from_stdin(),
        AnswerSource::None => Ok(Answers::new()),
    }
}

fn is_answered(answers: &Answers, key: &str) -> bool {
    answers.get(key).is_some_and(|value| !value.is_null())
}

/// Completes `preloaded` by asking every question it does not answer.
///
/// # Arguments
/// * `prompt` - Source of interactive answers
/// * `preloaded` - Answers already known; `null` values count as unanswered
///
/// # Returns
/// * `Result<Answers>` - Question answers in question order, followed by any other
///   preloaded keys
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
/// * `Error::ValidationError` if a selection falls outside the offered choices
pub fn get_answers(prompt: &dyn Prompter, preloaded: Answers) -> Result<Answers> {
    let mut answers = Answers::new();

    let project_name = match preloaded.get(PROJECT_NAME).filter(|v| !v.is_null()) {
        Some(value) => value.clone(),
        None => prompt.text("What is your project named?", validate_project_name)?.into(),
    };
    answers.insert(PROJECT_NAME.to_string(), project_name);

    let styling = match preloaded.get(STYLING).filter(|v| !v.is_null()) {
        Some(value) => value.clone(),
        None => {
            let labels = STYLING_CHOICES.map(|(label, _)| label);
            let index = prompt.select("Which styling library do you prefer?", &labels, 0)?;
            let (_, value) = chosen(STYLING, &STYLING_CHOICES, index)?;
            value.into()
        }
    };
    answers.insert(STYLING.to_string(), styling);

    let include_examples = match preloaded.get(INCLUDE_EXAMPLES).filter(|v| !v.is_null()) {
        Some(value) => value.clone(),
        None => {
            let index = prompt.select("Which kind of project do you want?", &PROJECT_TYPES, 0)?;
            let project_type = chosen(INCLUDE_EXAMPLES, &PROJECT_TYPES, index)?;
            (project_type == PROJECT_TYPES[0]).into()
        }
    };
    answers.insert(INCLUDE_EXAMPLES.to_string(), include_examples);

    let missing: Vec<_> =
        FEATURES.iter().filter(|(key, _, _)| !is_answered(&preloaded, key)).collect();
    let selected = if missing.is_empty() {
        Vec::new()
    } else {
        let labels: Vec<&str> = missing.iter().map(|(_, label, _)| *label).collect();
        let defaults: Vec<bool> = missing.iter().map(|(_, _, default)| *default).collect();
        prompt.multi_select("Select additional features", &labels, &defaults)?
    };
    for (key, _, _) in FEATURES {
        let value = match preloaded.get(key).filter(|v| !v.is_null()) {
            Some(value) => value.clone(),
            None => {
                let position = missing.iter().position(|(k, _, _)| *k == key);
                position.is_some_and(|p| selected.contains(&p)).into()
            }
        };
        answers.insert(key.to_string(), value);
    }

    for (key, value) in preloaded {
        answers.entry(key).or_insert(value);
    }

    debug!("Collected answers: {answers:?}");
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_answers_json() {
        let answers = parse_answers(r#"{"project_name": "demo", "install_tests": true}"#).unwrap();
        assert_eq!(answers.get(PROJECT_NAME), Some(&json!("demo")));
        assert_eq!(answers.get(INSTALL_TESTS), Some(&json!(true)));
    }

    #[test]
    fn test_parse_answers_yaml_fallback() {
        let answers = parse_answers("project_name: demo\nstyling: tailwind\n").unwrap();
        assert_eq!(answers.get(STYLING), Some(&json!("tailwind")));
        assert_eq!(answers.keys().next().map(String::as_str), Some(PROJECT_NAME));
    }

    #[test]
    fn test_parse_answers_blank_is_empty() {
        assert!(parse_answers("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_answers_rejects_non_objects() {
        assert!(matches!(parse_answers("[1, 2]"), Err(Error::AnswersError(_))));
        assert!(matches!(parse_answers("42"), Err(Error::AnswersError(_))));
    }

    #[test]
    fn test_get_answers_from_without_stdin() {
        assert!(get_answers_from(false).unwrap().is_empty());
    }
}
