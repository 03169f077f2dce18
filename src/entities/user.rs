// User - minimal account record referenced by Like owners

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ObjectId;
use crate::error::AppResult;
use crate::framework::entity::Entity;

pub const USERNAME_MAX_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn object_id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    fn set_object_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn validate(&self) -> AppResult<Vec<String>> {
        let mut problems = Vec::new();
        if self.username.trim().is_empty() {
            problems.push("username is required".to_string());
        }
        if self.username.len() > USERNAME_MAX_LEN {
            problems.push(format!(
                "username must be at most {} characters",
                USERNAME_MAX_LEN
            ));
        }
        Ok(problems)
    }

    fn display_label(&self) -> String {
        self.username.clone()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}
