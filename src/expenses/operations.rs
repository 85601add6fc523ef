use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::categories::operations::get_owned_category;
use crate::expenses::db_types::{CreateExpense, ExpenseChangeset, ExpenseRecord};
use crate::expenses::processor_enums::UpdateExpenseInputArgs;
use crate::reports::period::Period;
use crate::utils::commons::DbConn;
use crate::utils::errors::TrackerError;

pub fn validate_amount(amount: &BigDecimal) -> Result<(), TrackerError> {
    if amount <= &BigDecimal::from(0) {
        return Err(TrackerError::validation("amount must be greater than zero"));
    }
    Ok(())
}

/// Every stored date must land in a month the reports can chart.
pub fn validate_date(date: NaiveDate) -> Result<(), TrackerError> {
    Period::containing(date).map(|_| ())
}

/// Most recent first; ties broken by newest id.
pub fn list_expenses(conn: DbConn, owner: i32, category: Option<i32>) -> Result<Vec<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let mut query = expenses.filter(user_id.eq(owner)).into_boxed();

    if let Some(category_value) = category {
        query = query.filter(category_id.eq(category_value));
    }

    let res = query
        .order((date.desc(), id.desc()))
        .get_results::<ExpenseRecord>(conn)?;

    Ok(res)
}

pub fn find_expense(conn: DbConn, expense_id: i32) -> Result<Option<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let res = expenses
        .filter(id.eq(expense_id))
        .first::<ExpenseRecord>(conn)
        .optional()?;

    Ok(res)
}

pub fn add_expense(conn: DbConn, args: &CreateExpense) -> Result<ExpenseRecord> {
    use crate::schema::expenses::table as ExpensesTable;

    validate_amount(&args.amount)?;
    validate_date(args.date)?;
    get_owned_category(conn, args.user_id, args.category_id)?;

    let res = diesel::insert_into(ExpensesTable)
        .values(args)
        .get_result::<ExpenseRecord>(conn)?;

    tracing::info!(expense_id = res.id, user_id = res.user_id, "expense recorded");

    Ok(res)
}

pub fn update_expense(conn: DbConn, args: &UpdateExpenseInputArgs) -> Result<ExpenseRecord> {
    use crate::schema::expenses::dsl::*;

    let existing = find_expense(conn, args.expense_id)?
        .ok_or_else(|| TrackerError::not_found("Expense"))?;

    if let Some(new_amount) = &args.amount {
        validate_amount(new_amount)?;
    }
    if let Some(new_date) = args.date {
        validate_date(new_date)?;
    }

    if let Some(new_category) = args.category_id {
        if new_category != existing.category_id {
            get_owned_category(conn, existing.user_id, new_category)?;
        }
    }

    let changes = ExpenseChangeset {
        category_id: args.category_id,
        amount: args.amount.clone(),
        description: args.description.clone(),
        date: args.date,
    };

    if changes.is_empty() {
        return Ok(existing);
    }

    let res = diesel::update(expenses.filter(id.eq(existing.id)))
        .set(&changes)
        .get_result::<ExpenseRecord>(conn)?;

    Ok(res)
}

pub fn delete_expense(conn: DbConn, expense_id: i32) -> Result<()> {
    use crate::schema::expenses::dsl::*;

    let deleted = diesel::delete(expenses.filter(id.eq(expense_id))).execute(conn)?;
    if deleted == 0 {
        return Err(TrackerError::not_found("Expense").into());
    }

    tracing::info!(expense_id, "expense deleted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(&BigDecimal::from_str("0.01").unwrap()).is_ok());
        assert!(validate_amount(&BigDecimal::from(50)).is_ok());
        assert!(validate_amount(&BigDecimal::from(0)).is_err());
        assert!(validate_amount(&BigDecimal::from_str("-12.50").unwrap()).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()).is_ok());
        assert_eq!(
            validate_date(NaiveDate::from_ymd_opt(0, 3, 5).unwrap()),
            Err(TrackerError::validation("year must be between 1 and 9999"))
        );
        assert!(validate_date(NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap()).is_err());
    }

    #[test]
    fn test_empty_changeset() {
        assert!(ExpenseChangeset::default().is_empty());

        let changes = ExpenseChangeset {
            description: Some("coffee".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
