use anyhow::Result;
use diesel::PgConnection;

use crate::expenses::db_types::ExpenseRecord;
use crate::expenses::operations::list_expenses;
use crate::reports::db_types::{CategorySpendRow, MonthlyTotalRow};
use crate::reports::period::Period;
use crate::reports::sql_queries::{get_category_spend_for_period, get_monthly_totals};

/// What the report builders need from storage. Every call is a single read.
pub trait ExpenseStore {
    /// Most recent first.
    fn list_expenses(&mut self, user_id: i32, category_id: Option<i32>) -> Result<Vec<ExpenseRecord>>;

    /// Ascending by `(year, month)`, only months that have expenses.
    fn sum_expenses_by_month(&mut self, user_id: i32, category_id: i32) -> Result<Vec<MonthlyTotalRow>>;

    /// One row per category with at least one expense inside `period`.
    fn sum_expenses_by_category_for_month(
        &mut self,
        user_id: i32,
        period: Period,
    ) -> Result<Vec<CategorySpendRow>>;
}

impl ExpenseStore for PgConnection {
    fn list_expenses(&mut self, user_id: i32, category_id: Option<i32>) -> Result<Vec<ExpenseRecord>> {
        list_expenses(self, user_id, category_id)
    }

    fn sum_expenses_by_month(&mut self, user_id: i32, category_id: i32) -> Result<Vec<MonthlyTotalRow>> {
        get_monthly_totals(self, user_id, category_id)
    }

    fn sum_expenses_by_category_for_month(
        &mut self,
        user_id: i32,
        period: Period,
    ) -> Result<Vec<CategorySpendRow>> {
        get_category_spend_for_period(self, user_id, period)
    }
}
