//! Quiz Normalizer
//!
//! Repairs the generator's untrusted output into a schema-valid [`Quiz`].
//! The upstream generator is adversarially unreliable: its output is
//! supposed to be JSON but is not guaranteed to be well-formed, complete,
//! or on-schema.
//!
//! Policy: the only hard failure is unparsable raw output. Every
//! structural deficiency below the parse is auto-repaired:
//! - missing/untrusted quiz id → the locally generated fallback
//! - missing/non-array questions → empty quiz
//! - missing question ids → positional `"qN"`
//! - short/overlong/missing options → padded with placeholders, cut to 4
//! - non-integer or out-of-range correct index → 0
//!
//! The repairs trade correctness for availability: a possibly-wrong
//! "correct" answer is accepted rather than failing the whole quiz, and
//! padded options are cosmetic filler, never genuine distractors.
//! Question order is presentation order and is preserved exactly.

use serde_json::Value;

use crate::domain::entity::quiz::{Commentary, OPTION_COUNT, Question, Quiz};
use crate::error::{TriviaError, TriviaResult};

/// Normalize raw generator output into a schema-valid quiz
///
/// `fallback_quiz_id` is the identifier generated before calling the
/// external service, so one is always available even if the generator
/// drops it or echoes it incorrectly.
pub fn normalize(raw_text: &str, fallback_quiz_id: &str) -> TriviaResult<Quiz> {
    let stripped = strip_code_fences(raw_text);

    let parsed: Value = serde_json::from_str(stripped)
        .map_err(|e| TriviaError::InvalidGeneratorOutput(e.to_string()))?;

    let quiz_id = parsed
        .get("quizId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .unwrap_or(fallback_quiz_id)
        .to_string();

    let questions = match parsed.get("questions").and_then(Value::as_array) {
        Some(raw_questions) => raw_questions
            .iter()
            .enumerate()
            .map(|(idx, raw)| normalize_question(raw, idx))
            .collect(),
        None => {
            tracing::debug!(quiz_id = %quiz_id, "Generator output has no questions array");
            Vec::new()
        }
    };

    Ok(Quiz { quiz_id, questions })
}

/// Repair a single question at 0-based position `idx`
fn normalize_question(raw: &Value, idx: usize) -> Question {
    let id = raw
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("q{}", idx + 1));

    let text = raw
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut options: Vec<String> = raw
        .get("options")
        .and_then(Value::as_array)
        .map(|opts| opts.iter().map(option_text).collect())
        .unwrap_or_default();

    if options.len() != OPTION_COUNT {
        tracing::debug!(
            question = %id,
            found = options.len(),
            "Repairing option count"
        );
    }
    while options.len() < OPTION_COUNT {
        options.push(format!("Option {}", options.len() + 1));
    }
    options.truncate(OPTION_COUNT);

    let correct_index = match raw.get("correctIndex").and_then(Value::as_u64) {
        Some(i) if (i as usize) < OPTION_COUNT => i as usize,
        _ => {
            tracing::debug!(question = %id, "Resetting correct index to 0");
            0
        }
    };

    let commentary = raw
        .get("commentary")
        .map(|c| Commentary {
            intro: str_field(c, "intro"),
            correct: str_field(c, "correct"),
            wrong: str_field(c, "wrong"),
        })
        .unwrap_or_default();

    Question {
        id,
        text,
        options,
        correct_index,
        commentary,
    }
}

/// Coerce one option entry to text without changing the option count
fn option_text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Strip a surrounding markdown code fence, if present
///
/// Generators frequently wrap their JSON in ```json fences even when asked
/// not to. Content that is not JSON underneath still fails the parse.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FALLBACK: &str = "local-quiz-id";

    fn well_formed_question(n: usize) -> Value {
        json!({
            "id": format!("q{n}"),
            "text": format!("Question {n}?"),
            "options": ["A", "B", "C", "D"],
            "correctIndex": 2,
            "commentary": {
                "intro": "Think carefully.",
                "correct": "Well done.",
                "wrong": "Not quite."
            }
        })
    }

    #[test]
    fn test_well_formed_quiz_passes_through() {
        let raw = json!({
            "quizId": "generator-echoed-id",
            "questions": (1..=10).map(well_formed_question).collect::<Vec<_>>(),
        })
        .to_string();

        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.quiz_id, "generator-echoed-id");
        assert_eq!(quiz.questions.len(), 10);
        assert_eq!(quiz.questions[0].options, vec!["A", "B", "C", "D"]);
        assert_eq!(quiz.questions[0].correct_index, 2);
        assert_eq!(quiz.questions[0].commentary.intro, "Think carefully.");
    }

    #[test]
    fn test_unparsable_input_is_the_only_hard_failure() {
        assert!(matches!(
            normalize("not json", FALLBACK),
            Err(TriviaError::InvalidGeneratorOutput(_))
        ));
        assert!(matches!(
            normalize("{\"questions\": [", FALLBACK),
            Err(TriviaError::InvalidGeneratorOutput(_))
        ));
        assert!(matches!(
            normalize("", FALLBACK),
            Err(TriviaError::InvalidGeneratorOutput(_))
        ));
    }

    #[test]
    fn test_missing_quiz_id_uses_fallback() {
        let quiz = normalize("{\"questions\": []}", FALLBACK).unwrap();
        assert_eq!(quiz.quiz_id, FALLBACK);
    }

    #[test]
    fn test_empty_quiz_id_uses_fallback() {
        let raw = json!({ "quizId": "", "questions": [] }).to_string();
        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.quiz_id, FALLBACK);
    }

    #[test]
    fn test_non_string_quiz_id_uses_fallback() {
        let raw = json!({ "quizId": 42, "questions": [] }).to_string();
        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.quiz_id, FALLBACK);
    }

    #[test]
    fn test_missing_questions_degrades_to_empty() {
        let quiz = normalize("{}", FALLBACK).unwrap();
        assert!(quiz.questions.is_empty());

        let raw = json!({ "questions": "oops" }).to_string();
        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert!(quiz.questions.is_empty());
    }

    #[test]
    fn test_question_count_is_passed_through() {
        // Fewer than 10 questions is not repaired to 10
        let raw = json!({
            "questions": (1..=3).map(well_formed_question).collect::<Vec<_>>(),
        })
        .to_string();
        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.questions.len(), 3);
    }

    #[test]
    fn test_missing_ids_are_positional() {
        let raw = json!({
            "questions": [
                { "text": "first" },
                { "id": "custom", "text": "second" },
                { "id": "", "text": "third" },
            ]
        })
        .to_string();

        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.questions[0].id, "q1");
        assert_eq!(quiz.questions[1].id, "custom");
        assert_eq!(quiz.questions[2].id, "q3");
    }

    #[test]
    fn test_options_padded_to_four() {
        for len in 0..=2 {
            let opts: Vec<String> = (0..len).map(|i| format!("real {i}")).collect();
            let raw = json!({ "questions": [{ "options": opts }] }).to_string();

            let quiz = normalize(&raw, FALLBACK).unwrap();
            let options = &quiz.questions[0].options;
            assert_eq!(options.len(), 4);
            // Placeholder numbering continues from the real entries
            assert_eq!(options[3], "Option 4");
        }
    }

    #[test]
    fn test_options_truncated_to_four() {
        let opts: Vec<String> = (1..=10).map(|i| format!("opt {i}")).collect();
        let raw = json!({ "questions": [{ "options": opts }] }).to_string();

        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(
            quiz.questions[0].options,
            vec!["opt 1", "opt 2", "opt 3", "opt 4"]
        );
    }

    #[test]
    fn test_non_array_options_replaced() {
        let raw = json!({ "questions": [{ "options": "not an array" }] }).to_string();

        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(
            quiz.questions[0].options,
            vec!["Option 1", "Option 2", "Option 3", "Option 4"]
        );
    }

    #[test]
    fn test_non_string_option_entries_keep_their_position() {
        let raw = json!({ "questions": [{ "options": ["a", 2, true, "d"] }] }).to_string();

        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.questions[0].options.len(), 4);
        assert_eq!(quiz.questions[0].options[0], "a");
        assert_eq!(quiz.questions[0].options[3], "d");
    }

    #[test]
    fn test_correct_index_reset_when_invalid() {
        for bad in [json!(4), json!(-1), json!(2.5), json!("2"), json!(null)] {
            let raw = json!({
                "questions": [{ "options": ["a", "b", "c", "d"], "correctIndex": bad }]
            })
            .to_string();

            let quiz = normalize(&raw, FALLBACK).unwrap();
            assert_eq!(quiz.questions[0].correct_index, 0, "for {bad:?}");
        }
    }

    #[test]
    fn test_correct_index_in_range_kept() {
        for good in 0..4u64 {
            let raw = json!({
                "questions": [{ "options": ["a", "b", "c", "d"], "correctIndex": good }]
            })
            .to_string();

            let quiz = normalize(&raw, FALLBACK).unwrap();
            assert_eq!(quiz.questions[0].correct_index, good as usize);
        }
    }

    #[test]
    fn test_commentary_defaults_empty() {
        let raw = json!({ "questions": [{ "text": "hm" }] }).to_string();
        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.questions[0].commentary, Commentary::default());

        let raw = json!({
            "questions": [{ "commentary": { "intro": "hello" } }]
        })
        .to_string();
        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.questions[0].commentary.intro, "hello");
        assert_eq!(quiz.questions[0].commentary.correct, "");
    }

    #[test]
    fn test_question_order_preserved() {
        let raw = json!({
            "questions": [
                { "text": "z" }, { "text": "a" }, { "text": "z" }, { "text": "m" },
            ]
        })
        .to_string();

        let quiz = normalize(&raw, FALLBACK).unwrap();
        let texts: Vec<&str> = quiz.questions.iter().map(|q| q.text.as_str()).collect();
        // No reordering, no dedup
        assert_eq!(texts, vec!["z", "a", "z", "m"]);
    }

    #[test]
    fn test_every_repair_yields_schema_valid_questions() {
        let raw = json!({
            "questions": [
                {},
                { "options": [] },
                { "options": ["only one"] },
                { "options": (1..=10).map(|i| i.to_string()).collect::<Vec<_>>() },
                { "correctIndex": 99 },
                { "correctIndex": "not a number" },
            ]
        })
        .to_string();

        let quiz = normalize(&raw, FALLBACK).unwrap();
        assert_eq!(quiz.questions.len(), 6);
        for question in &quiz.questions {
            assert_eq!(question.options.len(), OPTION_COUNT);
            assert!(question.correct_index < OPTION_COUNT);
        }
    }

    #[test]
    fn test_code_fences_stripped() {
        let raw = "```json\n{\"quizId\": \"fenced\", \"questions\": []}\n```";
        let quiz = normalize(raw, FALLBACK).unwrap();
        assert_eq!(quiz.quiz_id, "fenced");

        let raw = "```\n{\"questions\": []}\n```";
        assert!(normalize(raw, FALLBACK).is_ok());

        // Fenced garbage is still garbage
        assert!(matches!(
            normalize("```json\nnot json\n```", FALLBACK),
            Err(TriviaError::InvalidGeneratorOutput(_))
        ));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = json!({
            "questions": [{ "options": ["a"], "correctIndex": 9 }]
        })
        .to_string();

        let once = normalize(&raw, FALLBACK).unwrap();
        let again = normalize(&serde_json::to_string(&once).unwrap(), FALLBACK).unwrap();
        assert_eq!(once, again);
    }
}
