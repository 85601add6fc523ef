use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use crate::categories::db_types::CategoryRecord;
use crate::utils::commons::deserialize_some;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AddCategoryInputArgs {
    pub user_id: i32,
    pub name: String,
    pub monthly_budget: Option<BigDecimal>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateCategoryInputArgs {
    pub category_id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub monthly_budget: Option<Option<BigDecimal>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum CategoriesProcessorInput {
    GetCategories(i32),
    AddCategory(AddCategoryInputArgs),
    UpdateCategory(UpdateCategoryInputArgs),
    DeleteCategory(i32),
    InitializeDefaults(i32),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum CategoriesProcessorOutput {
    GetCategories(Vec<CategoryRecord>),
    AddCategory(CategoryRecord),
    UpdateCategory(CategoryRecord),
    DeleteCategory,
    /// names that were actually created
    InitializeDefaults(Vec<String>),
}
