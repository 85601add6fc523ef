use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::expenses::db_types::{CreateExpense, ExpenseRecord};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdateExpenseInputArgs {
    pub expense_id: i32,
    pub category_id: Option<i32>,
    pub amount: Option<BigDecimal>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorInput {
    GetExpenses(i32),
    AddExpense(CreateExpense),
    UpdateExpense(UpdateExpenseInputArgs),
    DeleteExpense(i32),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorOutput {
    GetExpenses(Vec<ExpenseRecord>),
    AddExpense(ExpenseRecord),
    UpdateExpense(ExpenseRecord),
    DeleteExpense,
}
