// Creation/modification timestamps populated by the persistence layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::framework::schema::{FieldDefinition, FieldType};

/// Timestamp pair mixed into persisted models.
///
/// `created` is set exactly once, at first successful save; `modified` is
/// refreshed on every save, including the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Called by the persistence layer on every successful save
    pub(crate) fn stamp(&mut self, now: DateTime<Utc>) {
        if self.created.is_none() {
            self.created = Some(now);
        }
        self.modified = Some(now);
    }

    /// Schema fragment contributed by this mixin
    pub fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("created", FieldType::Time)
                .optional()
                .immutable(),
            FieldDefinition::new("modified", FieldType::Time).optional(),
        ]
    }
}
