// Group - minimal named collective referenced by Like owners

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ObjectId;
use crate::error::AppResult;
use crate::framework::entity::Entity;

pub const GROUP_NAME_MAX_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Group {
    const KIND: &'static str = "group";

    fn object_id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    fn set_object_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn validate(&self) -> AppResult<Vec<String>> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name is required".to_string());
        }
        if self.name.len() > GROUP_NAME_MAX_LEN {
            problems.push(format!(
                "name must be at most {} characters",
                GROUP_NAME_MAX_LEN
            ));
        }
        Ok(problems)
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
