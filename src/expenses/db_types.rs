use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::expenses as ExpensesTable;
use crate::utils::commons::serialize_decimal;

#[derive(Serialize, Deserialize, Queryable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRecord {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    #[serde(serialize_with = "serialize_decimal")]
    pub amount: BigDecimal,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = ExpensesTable)]
pub struct CreateExpense {
    pub user_id: i32,
    pub category_id: i32,
    pub amount: BigDecimal,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = ExpensesTable)]
pub struct ExpenseChangeset {
    pub category_id: Option<i32>,
    pub amount: Option<BigDecimal>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseChangeset {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.amount.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}
