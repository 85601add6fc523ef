use anyhow::Result;
use diesel::prelude::*;
use diesel::sql_types::{Date, Integer};

use crate::reports::db_types::{CategorySpendRow, MonthlyTotalRow};
use crate::reports::period::Period;
use crate::utils::commons::DbConn;

const MONTHLY_TOTALS_QUERY: &str = r"
select cast(extract(year from e.date) as integer) as year,
       cast(extract(month from e.date) as integer) as month,
       sum(e.amount) as total
from expenses as e
where e.user_id = $1 and e.category_id = $2
group by 1, 2
order by 1, 2;
";

const CATEGORY_SPEND_QUERY: &str = r"
select c.id as category_id,
       c.name as category_name,
       c.monthly_budget as monthly_budget,
       sum(e.amount) as total_spent
from categories as c
inner join expenses as e on e.category_id = c.id
where e.user_id = $1 and e.date >= $2 and e.date < $3
group by c.id, c.name, c.monthly_budget
order by c.id;
";

pub fn get_monthly_totals(
    conn: DbConn,
    user_id: i32,
    category_id: i32,
) -> Result<Vec<MonthlyTotalRow>> {
    let res = diesel::sql_query(MONTHLY_TOTALS_QUERY)
        .bind::<Integer, _>(user_id)
        .bind::<Integer, _>(category_id)
        .load::<MonthlyTotalRow>(conn)?;

    Ok(res)
}

pub fn get_category_spend_for_period(
    conn: DbConn,
    user_id: i32,
    period: Period,
) -> Result<Vec<CategorySpendRow>> {
    let (start, end) = period.bounds();

    let res = diesel::sql_query(CATEGORY_SPEND_QUERY)
        .bind::<Integer, _>(user_id)
        .bind::<Date, _>(start)
        .bind::<Date, _>(end)
        .load::<CategorySpendRow>(conn)?;

    Ok(res)
}
