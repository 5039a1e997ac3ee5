// Résumé comparison: model analysis, deterministic skill detection and
// document text extraction for uploads.

pub mod analysis;
pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod skills;
