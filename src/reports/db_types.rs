use bigdecimal::BigDecimal;
use diesel::QueryableByName;
use diesel::sql_types::{Integer, Nullable, Numeric, Text};
use serde::{Deserialize, Serialize};

use crate::expenses::db_types::ExpenseRecord;
use crate::reports::period::Period;
use crate::utils::commons::{serialize_decimal, serialize_optional_decimal};

/// One `(year, month)` bucket for a single category.
#[derive(QueryableByName, Debug, Clone, PartialEq)]
pub struct MonthlyTotalRow {
    #[diesel(sql_type = Integer)]
    pub year: i32,
    #[diesel(sql_type = Integer)]
    pub month: i32,
    #[diesel(sql_type = Numeric)]
    pub total: BigDecimal,
}

#[derive(QueryableByName, Debug, Clone, PartialEq)]
pub struct CategorySpendRow {
    #[diesel(sql_type = Integer)]
    pub category_id: i32,
    #[diesel(sql_type = Text)]
    pub category_name: String,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub monthly_budget: Option<BigDecimal>,
    #[diesel(sql_type = Numeric)]
    pub total_spent: BigDecimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// `YYYY-MM`
    pub date: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub total: BigDecimal,
}

/// A row that cannot be bucketed is a storage fault, not a caller error.
impl TryFrom<MonthlyTotalRow> for ChartPoint {
    type Error = anyhow::Error;

    fn try_from(row: MonthlyTotalRow) -> Result<Self, Self::Error> {
        let period = Period::from_year_month(row.year, row.month).map_err(|e| {
            anyhow::anyhow!("stored month {}-{} cannot be charted: {}", row.year, row.month, e)
        })?;
        Ok(Self {
            date: period.to_string(),
            total: row.total,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryExpensesReport {
    pub expenses: Vec<ExpenseRecord>,
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlySummaryEntry {
    pub category_id: i32,
    pub category_name: String,
    #[serde(serialize_with = "serialize_optional_decimal")]
    pub monthly_budget: Option<BigDecimal>,
    #[serde(serialize_with = "serialize_decimal")]
    pub total_spent: BigDecimal,
    pub percentage_used: Option<f64>,
}
