use anyhow::Result;
use serde::{Deserialize, Serialize};
use crate::categories::config::CategoriesConfig;
use crate::categories::processor_enums::{CategoriesProcessorInput, CategoriesProcessorOutput};
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::reports::processor_enums::{ReportsProcessorInput, ReportsProcessorOutput};
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::get_conn;
use crate::utils::traits::ActionProcessor;

#[derive(Deserialize, Serialize, Debug)]
pub enum ActionRouterInput {
    Users(UsersProcessorInput),
    Categories(CategoriesProcessorInput),
    Expenses(ExpensesProcessorInput),
    Reports(ReportsProcessorInput),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ActionRouterOutput {
    Users(UsersProcessorOutput),
    Categories(CategoriesProcessorOutput),
    Expenses(ExpensesProcessorOutput),
    Reports(ReportsProcessorOutput),
}

impl ActionRouterInput {
    /// Every action checks out its own pooled connection and hands it back when done.
    pub async fn process(&self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        let mut conn = get_conn(&app_config.pool)?;
        let mut app_config = app_config;

        match self {
            ActionRouterInput::Users(processor) => {
                let res = processor.process(&mut app_config, &mut (), Some(&mut conn)).await?;
                Ok(ActionRouterOutput::Users(res))
            }
            ActionRouterInput::Categories(processor) => {
                let mut config = CategoriesConfig::default();

                let res = processor.process(&mut app_config, &mut config, Some(&mut conn)).await?;
                Ok(ActionRouterOutput::Categories(res))
            }
            ActionRouterInput::Expenses(processor) => {
                let res = processor.process(&mut app_config, &mut (), Some(&mut conn)).await?;
                Ok(ActionRouterOutput::Expenses(res))
            }
            ActionRouterInput::Reports(processor) => {
                let res = processor.process(&mut app_config, &mut (), Some(&mut conn)).await?;
                Ok(ActionRouterOutput::Reports(res))
            }
        }
    }
}
