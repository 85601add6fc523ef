/// Seeded once per user, cannot be renamed or deleted afterwards.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Groceries",
    "Health",
    "Entertainment",
    "Shopping",
    "Food & Dining",
    "Transportation",
    "Utilities",
    "Other",
];

#[derive(Clone, Debug)]
pub struct CategoriesConfig {
    pub default_categories: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            default_categories: DEFAULT_CATEGORIES.iter().map(|n| n.to_string()).collect(),
        }
    }
}
