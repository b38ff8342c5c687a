use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryLabel};

/// Reference entity labeling a question's topic.
///
/// Categories are seeded by migration and treated as static reference data;
/// the API never creates, updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub label: CategoryLabel,
}
