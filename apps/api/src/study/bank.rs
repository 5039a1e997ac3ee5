//! Study-guide question bank: static questions, filters, and per-question
//! bookmark/completion progress.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::catalog::Difficulty;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StudyCategory {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct SeedQuestion {
    id: &'static str,
    category: &'static str,
    text: &'static str,
    difficulty: Difficulty,
    bookmarked: bool,
    completed: bool,
}

pub const STUDY_CATEGORIES: [StudyCategory; 4] = [
    StudyCategory {
        id: "product-management",
        name: "Product Management",
    },
    StudyCategory {
        id: "software-engineering",
        name: "Software Engineering",
    },
    StudyCategory {
        id: "data-science",
        name: "Data Science",
    },
    StudyCategory {
        id: "leadership",
        name: "Leadership",
    },
];

const QUESTIONS: [SeedQuestion; 6] = [
    SeedQuestion {
        id: "1",
        category: "product-management",
        text: "How would you prioritize features for a new product?",
        difficulty: Difficulty::Medium,
        bookmarked: true,
        completed: true,
    },
    SeedQuestion {
        id: "2",
        category: "product-management",
        text: "Describe a time when you had to make a difficult product decision with limited data.",
        difficulty: Difficulty::Hard,
        bookmarked: false,
        completed: true,
    },
    SeedQuestion {
        id: "3",
        category: "software-engineering",
        text: "Explain the difference between REST and GraphQL APIs.",
        difficulty: Difficulty::Medium,
        bookmarked: true,
        completed: false,
    },
    SeedQuestion {
        id: "4",
        category: "software-engineering",
        text: "How would you design a URL shortening service?",
        difficulty: Difficulty::Hard,
        bookmarked: false,
        completed: false,
    },
    SeedQuestion {
        id: "5",
        category: "data-science",
        text: "Explain the bias-variance tradeoff in machine learning.",
        difficulty: Difficulty::Hard,
        bookmarked: true,
        completed: true,
    },
    SeedQuestion {
        id: "6",
        category: "leadership",
        text: "Describe a situation where you had to lead a team through a challenging project.",
        difficulty: Difficulty::Medium,
        bookmarked: false,
        completed: false,
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuestionProgress {
    pub bookmarked: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyQuestion {
    pub id: &'static str,
    pub category: &'static str,
    pub text: &'static str,
    pub difficulty: Difficulty,
    pub bookmarked: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyCategorySummary {
    pub id: &'static str,
    pub name: &'static str,
    pub question_count: usize,
    pub completed_count: usize,
}

/// Filters from the study-guide sidebar. All optional; combined with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub bookmarked_only: bool,
}

impl StudyFilter {
    fn accepts(&self, question: &StudyQuestion) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            if !question.text.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if question.category != category {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if question.difficulty != difficulty {
                return false;
            }
        }
        !(self.bookmarked_only && !question.bookmarked)
    }
}

/// In-memory progress for the bank, seeded from the authored defaults.
#[derive(Clone)]
pub struct StudyProgress {
    inner: Arc<RwLock<HashMap<&'static str, QuestionProgress>>>,
}

impl Default for StudyProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyProgress {
    pub fn new() -> Self {
        let seeded = QUESTIONS
            .iter()
            .map(|q| {
                (
                    q.id,
                    QuestionProgress {
                        bookmarked: q.bookmarked,
                        completed: q.completed,
                    },
                )
            })
            .collect();
        Self {
            inner: Arc::new(RwLock::new(seeded)),
        }
    }

    async fn snapshot(&self) -> Vec<StudyQuestion> {
        let progress = self.inner.read().await;
        QUESTIONS
            .iter()
            .map(|q| {
                let p = progress.get(q.id).copied().unwrap_or_default();
                StudyQuestion {
                    id: q.id,
                    category: q.category,
                    text: q.text,
                    difficulty: q.difficulty,
                    bookmarked: p.bookmarked,
                    completed: p.completed,
                }
            })
            .collect()
    }

    pub async fn questions(&self, filter: &StudyFilter) -> Vec<StudyQuestion> {
        self.snapshot()
            .await
            .into_iter()
            .filter(|q| filter.accepts(q))
            .collect()
    }

    pub async fn categories(&self) -> Vec<StudyCategorySummary> {
        let questions = self.snapshot().await;
        STUDY_CATEGORIES
            .iter()
            .map(|c| {
                let in_category = questions.iter().filter(|q| q.category == c.id);
                StudyCategorySummary {
                    id: c.id,
                    name: c.name,
                    question_count: in_category.clone().count(),
                    completed_count: in_category.filter(|q| q.completed).count(),
                }
            })
            .collect()
    }

    pub async fn toggle_bookmark(&self, id: &str) -> Result<QuestionProgress, AppError> {
        self.toggle(id, |p| p.bookmarked = !p.bookmarked).await
    }

    pub async fn toggle_completed(&self, id: &str) -> Result<QuestionProgress, AppError> {
        self.toggle(id, |p| p.completed = !p.completed).await
    }

    async fn toggle(
        &self,
        id: &str,
        f: impl FnOnce(&mut QuestionProgress),
    ) -> Result<QuestionProgress, AppError> {
        let mut progress = self.inner.write().await;
        let entry = progress
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Study question '{id}' not found")))?;
        f(entry);
        Ok(*entry)
    }
}
