// All LLM prompt constants for the Interview module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role line for question generation. Combined with the JSON-only rules.
pub const QUESTION_ROLE: &str = "You are an experienced hiring manager who writes realistic, \
    well-scoped interview questions.";

/// Question prompt template.
/// Placeholders: {request}, {slot}, {count}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"{request}

This is question {slot} of {count} in the same interview. Choose a different angle than a generic opener so the set does not repeat itself.

Break the scenario into a series of smaller, focused sub-questions ("parts") that can be answered one at a time. Each part should be clear and answerable on its own, and the overall scenario/context should be explained up front. After the main parts, provide a list of follow-up questions for deeper discussion.

Return a JSON object with this EXACT schema (no extra fields):
{
  "scenario": "Background context for the question",
  "parts": [
    "First focused sub-question",
    "Second focused sub-question"
  ],
  "follow_up_questions": [
    "First follow-up question"
  ]
}

HARD RULES:
1. "scenario" must be a non-empty string
2. "parts" must contain between 1 and 8 non-empty strings
3. "follow_up_questions" may be empty but must be present"#;

/// Role line for answer evaluation. Combined with the JSON-only rules.
pub const FEEDBACK_ROLE: &str = "You are a demanding but fair interview coach who gives \
    specific, constructive feedback on candidate answers.";

/// Feedback prompt template.
/// Placeholders: {question}, {answer}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Analyze this interview answer to the following question and provide detailed, constructive feedback.

QUESTION: "{question}"

ANSWER: "{answer}"

Provide comprehensive feedback on the following aspects:

1. Content Quality (depth of knowledge, accuracy, completeness)
2. Structure and Organization (logical flow, clarity of thought)
3. Communication Effectiveness (clarity of expression, conciseness)
4. Problem-Solving Approach (methodology, creativity, consideration of alternatives)
5. Technical Accuracy (if applicable, correctness of technical concepts)
6. Specific Examples/Evidence (use of relevant examples to support points)

For each strength identified, explain why it is effective.
For each area of improvement, provide a specific suggestion on how to enhance it.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 72,
  "strengths": ["specific strength 1", "specific strength 2"],
  "improvements": ["specific improvement suggestion 1"],
  "summary": "A brief 1-2 sentence overall assessment",
  "details": ["detailed feedback point 1", "detailed feedback point 2"]
}

HARD RULES:
1. "score" is an INTEGER from 0 to 100 for the overall quality of the answer
2. "summary" must be a non-empty string
3. "details" must contain at least one point
4. No list may contain empty strings"#;
