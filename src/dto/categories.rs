use std::collections::BTreeMap;

use crate::domain::category::Category;

/// JSON object mapping category id to display name.
pub type CategoryMap = BTreeMap<i32, String>;

/// Builds the id to name mapping returned by category-bearing endpoints.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id.get(), c.label.into_inner()))
        .collect()
}
