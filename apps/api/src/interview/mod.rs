// Mock interviews: question prefetch, the answer/advance session flow,
// per-answer feedback and the aggregate report.
// All LLM calls go through llm_client.

pub mod feedback;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod report;
pub mod session;
pub mod store;
