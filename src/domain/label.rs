use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A colored category label for tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    pub name: String,
    /// Hex color, e.g. "#ef4444"
    pub color: String,
}

impl Label {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// The label set seeded on first use
pub fn default_labels() -> Vec<Label> {
    vec![
        Label::new("bug", "Bug", "#ef4444"),
        Label::new("feature", "Feature", "#8b5cf6"),
        Label::new("design", "Design", "#ec4899"),
        Label::new("docs", "Docs", "#06b6d4"),
        Label::new("refactor", "Refactor", "#f59e0b"),
        Label::new("research", "Research", "#5eaa9f"),
        Label::new("planning", "Planning", "#7ea88f"),
        Label::new("admin", "Admin", "#8b9caa"),
        Label::new("learning", "Learning", "#9a9fd8"),
        Label::new("meeting", "Meeting", "#c9887a"),
        Label::new("review", "Review", "#b898a8"),
    ]
}

/// A lightweight one-line todo, separate from board tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickTodo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl QuickTodo {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
