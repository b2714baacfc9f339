//! Prompt Builder
//!
//! Deterministic instruction text for the external generator. The prompt
//! asks for strict JSON on the quiz schema and echoes the locally
//! generated quiz id; the normalizer still treats the reply as untrusted.

use crate::domain::entity::quiz::{OPTION_COUNT, QUESTION_COUNT};

/// Build the generation prompt for one quiz request
pub fn build_prompt(difficulty: &str, quiz_id: &str) -> String {
    format!(
        "Generate a general-knowledge trivia quiz as a single JSON object, \
         with no surrounding prose and no markdown code fences.\n\
         \n\
         Difficulty: {difficulty}\n\
         \n\
         The JSON object must have this exact shape:\n\
         {{\n\
           \"quizId\": \"{quiz_id}\",\n\
           \"questions\": [\n\
             {{\n\
               \"id\": \"q1\",\n\
               \"text\": \"...\",\n\
               \"options\": [\"...\", \"...\", \"...\", \"...\"],\n\
               \"correctIndex\": 0,\n\
               \"commentary\": {{\n\
                 \"intro\": \"...\",\n\
                 \"correct\": \"...\",\n\
                 \"wrong\": \"...\"\n\
               }}\n\
             }}\n\
           ]\n\
         }}\n\
         \n\
         Rules:\n\
         - Exactly {QUESTION_COUNT} questions, ids \"q1\" through \"q{QUESTION_COUNT}\".\n\
         - Exactly {OPTION_COUNT} options per question; correctIndex is the \
         0-based position of the right answer.\n\
         - Echo the quizId exactly as given above.\n\
         - Commentary: \"intro\" teases the question, \"correct\" and \"wrong\" \
         explain the answer after a right or wrong guess."
    )
}
