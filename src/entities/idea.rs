// Idea - a titled piece of content with creation/modification timestamps

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ObjectId;
use crate::error::{AppError, AppResult};
use crate::framework::entity::Entity;
use crate::framework::timestamps::Timestamps;
use crate::framework::url::{CanonicalUrl, UrlSource};

pub const TITLE_MAX_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub stamps: Timestamps,
}

impl Idea {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            stamps: Timestamps::default(),
        }
    }
}

impl Entity for Idea {
    const KIND: &'static str = "idea";

    fn object_id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    fn set_object_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn validate(&self) -> AppResult<Vec<String>> {
        let mut problems = Vec::new();
        if self.title.trim().is_empty() {
            problems.push("title is required".to_string());
        }
        if self.title.len() > TITLE_MAX_LEN {
            problems.push(format!("title must be at most {} characters", TITLE_MAX_LEN));
        }
        if self.content.trim().is_empty() {
            problems.push("content is required".to_string());
        }
        Ok(problems)
    }

    fn display_label(&self) -> String {
        self.title.clone()
    }

    fn timestamps_mut(&mut self) -> Option<&mut Timestamps> {
        Some(&mut self.stamps)
    }
}

impl CanonicalUrl for Idea {
    fn url_source(&self) -> AppResult<UrlSource> {
        let id = self.id.as_ref().ok_or_else(|| {
            AppError::Validation("an unsaved idea has no canonical URL".to_string())
        })?;
        Ok(UrlSource::Path(format!("/ideas/{}/", id)))
    }
}

impl fmt::Display for Idea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
