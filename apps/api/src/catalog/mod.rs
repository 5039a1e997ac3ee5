//! Interview catalog: the static category/subcategory taxonomy and lookups.

pub mod handlers;

mod data;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Question difficulty. Lowercase on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Subcategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub subcategories: &'static [Subcategory],
}

impl Category {
    pub fn subcategory(&self, id: &str) -> Option<&'static Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    fn matches(&self, needle: &str) -> bool {
        let hit = |text: &str| text.to_lowercase().contains(needle);
        hit(self.name)
            || hit(self.description)
            || self
                .subcategories
                .iter()
                .any(|s| hit(s.name) || hit(s.description))
    }
}

/// The resolved topic of an interview, as used in prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterviewTopic {
    pub category_id: String,
    pub category_name: String,
    pub category_description: String,
    pub subcategory_id: Option<String>,
    pub subcategory_name: Option<String>,
    pub subcategory_description: Option<String>,
}

pub fn categories() -> &'static [Category] {
    data::all()
}

pub fn find_category(id: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.id == id)
}

/// Case-insensitive search over category and subcategory names/descriptions.
/// A blank query returns the whole catalog in authored order.
pub fn search(query: &str) -> Vec<&'static Category> {
    let needle = query.trim().to_lowercase();
    categories()
        .iter()
        .filter(|c| needle.is_empty() || c.matches(&needle))
        .collect()
}

/// Resolves ids from the picker into an `InterviewTopic`.
/// Unknown category or subcategory ids are `NotFound`.
pub fn resolve(category_id: &str, subcategory_id: Option<&str>) -> Result<InterviewTopic, AppError> {
    let category = find_category(category_id)
        .ok_or_else(|| AppError::NotFound(format!("Category '{category_id}' not found")))?;

    let subcategory = match subcategory_id.map(str::trim).filter(|s| !s.is_empty()) {
        Some(sub_id) => Some(category.subcategory(sub_id).ok_or_else(|| {
            AppError::NotFound(format!(
                "Subcategory '{sub_id}' not found in category '{category_id}'"
            ))
        })?),
        None => None,
    };

    Ok(InterviewTopic {
        category_id: category.id.to_string(),
        category_name: category.name.to_string(),
        category_description: category.description.to_string(),
        subcategory_id: subcategory.map(|s| s.id.to_string()),
        subcategory_name: subcategory.map(|s| s.name.to_string()),
        subcategory_description: subcategory.map(|s| s.description.to_string()),
    })
}
