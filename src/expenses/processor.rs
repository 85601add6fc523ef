use anyhow::anyhow;

use crate::expenses::operations::{add_expense, delete_expense, list_expenses, update_expense};
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::commons::PooledConn;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<(), ExpensesProcessorOutput> for ExpensesProcessorInput {
    async fn process(
        &self,
        _app_config: &mut AppConfig,
        _local_config: &mut (),
        conn: Option<&mut PooledConn>,
    ) -> anyhow::Result<ExpensesProcessorOutput> {
        let app_conn = conn.ok_or_else(|| anyhow!("Failed to get conn"))?;

        match self {
            ExpensesProcessorInput::GetExpenses(user_id) => {
                let res = list_expenses(app_conn, *user_id, None)?;
                Ok(ExpensesProcessorOutput::GetExpenses(res))
            }
            ExpensesProcessorInput::AddExpense(args) => {
                let res = add_expense(app_conn, args)?;
                Ok(ExpensesProcessorOutput::AddExpense(res))
            }
            ExpensesProcessorInput::UpdateExpense(args) => {
                let res = update_expense(app_conn, args)?;
                Ok(ExpensesProcessorOutput::UpdateExpense(res))
            }
            ExpensesProcessorInput::DeleteExpense(expense_id) => {
                delete_expense(app_conn, *expense_id)?;
                Ok(ExpensesProcessorOutput::DeleteExpense)
            }
        }
    }
}
