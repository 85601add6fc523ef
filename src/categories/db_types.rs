use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::categories as CategoriesTable;
use crate::utils::commons::serialize_optional_decimal;

#[derive(Serialize, Deserialize, Queryable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = CategoriesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRecord {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub is_default: bool,
    #[serde(serialize_with = "serialize_optional_decimal")]
    pub monthly_budget: Option<BigDecimal>,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = CategoriesTable)]
pub struct CreateCategory {
    pub user_id: i32,
    pub name: String,
    pub is_default: bool,
    pub monthly_budget: Option<BigDecimal>,
}

/// `monthly_budget: Some(None)` writes NULL, `None` leaves the column alone.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq)]
#[diesel(table_name = CategoriesTable)]
pub struct CategoryChangeset {
    pub name: Option<String>,
    pub monthly_budget: Option<Option<BigDecimal>>,
}

impl CategoryChangeset {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.monthly_budget.is_none()
    }
}
