use serde::{Deserialize, Serialize};
use crate::reports::db_types::{CategoryExpensesReport, MonthlySummaryEntry};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoryTotalsInputArgs {
    pub user_id: i32,
    pub category_id: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MonthlySummaryInputArgs {
    pub user_id: i32,
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ReportsProcessorInput {
    CategoryTotals(CategoryTotalsInputArgs),
    MonthlySummary(MonthlySummaryInputArgs),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ReportsProcessorOutput {
    CategoryTotals(CategoryExpensesReport),
    MonthlySummary(Vec<MonthlySummaryEntry>),
}
