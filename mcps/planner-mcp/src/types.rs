//! Value types shared between the tool parameters and the planner API

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status as the planner API spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    Pending,
    Working,
    #[serde(rename = "Pending For Review")]
    PendingForReview,
    Complete,
    #[serde(rename = "Need Fixed")]
    NeedFixed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Working => "Working",
            TaskStatus::PendingForReview => "Pending For Review",
            TaskStatus::Complete => "Complete",
            TaskStatus::NeedFixed => "Need Fixed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of comment attached to a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CommentType {
    #[default]
    Note,
    Question,
    Suggestion,
    Issue,
    Other,
}

impl CommentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentType::Note => "Note",
            CommentType::Question => "Question",
            CommentType::Suggestion => "Suggestion",
            CommentType::Issue => "Issue",
            CommentType::Other => "Other",
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(TaskStatus::PendingForReview).unwrap(),
            json!("Pending For Review")
        );
        let parsed: TaskStatus = serde_json::from_value(json!("Need Fixed")).unwrap();
        assert_eq!(parsed, TaskStatus::NeedFixed);
        assert_eq!(parsed.to_string(), "Need Fixed");
    }

    #[test]
    fn test_status_rejects_other_spellings() {
        assert!(serde_json::from_value::<TaskStatus>(json!("working")).is_err());
        assert!(serde_json::from_value::<TaskStatus>(json!("Done")).is_err());
    }

    #[test]
    fn test_comment_type_default_is_note() {
        assert_eq!(CommentType::default(), CommentType::Note);
        assert_eq!(serde_json::to_value(CommentType::Issue).unwrap(), json!("Issue"));
    }
}
