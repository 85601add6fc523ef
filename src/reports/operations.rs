use anyhow::Result;
use bigdecimal::{BigDecimal, ToPrimitive};

use crate::reports::db_types::{CategoryExpensesReport, ChartPoint, MonthlySummaryEntry};
use crate::reports::period::Period;
use crate::reports::store::ExpenseStore;

/// `total_spent / monthly_budget * 100`, or `None` when there is no budget to
/// measure against. A zero budget yields `None` as well, the row still reports
/// `monthly_budget: 0` so callers can tell it apart from an unset budget.
pub fn percentage_used(total_spent: &BigDecimal, monthly_budget: Option<&BigDecimal>) -> Option<f64> {
    let budget = monthly_budget?;
    if budget == &BigDecimal::from(0) {
        return None;
    }

    let scaled = total_spent * &BigDecimal::from(100);
    (&scaled / budget).to_f64()
}

/// Every expense in the category plus one chart point per month that has spending.
pub fn category_monthly_totals<S>(
    store: &mut S,
    user_id: i32,
    category_id: i32,
) -> Result<CategoryExpensesReport>
where
    S: ExpenseStore + ?Sized,
{
    let expenses = store.list_expenses(user_id, Some(category_id))?;

    let chart_data = store
        .sum_expenses_by_month(user_id, category_id)?
        .into_iter()
        .map(ChartPoint::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CategoryExpensesReport {
        expenses,
        chart_data,
    })
}

/// Spending per category for one month. Categories without expenses in that month are left out.
pub fn monthly_summary<S>(store: &mut S, user_id: i32, period: Period) -> Result<Vec<MonthlySummaryEntry>>
where
    S: ExpenseStore + ?Sized,
{
    let rows = store.sum_expenses_by_category_for_month(user_id, period)?;

    let summary = rows
        .into_iter()
        .map(|row| {
            let percentage = percentage_used(&row.total_spent, row.monthly_budget.as_ref());
            MonthlySummaryEntry {
                category_id: row.category_id,
                category_name: row.category_name,
                monthly_budget: row.monthly_budget,
                total_spent: row.total_spent,
                percentage_used: percentage,
            }
        })
        .collect();

    Ok(summary)
}
