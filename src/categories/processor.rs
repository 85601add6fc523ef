use anyhow::anyhow;

use crate::categories::config::CategoriesConfig;
use crate::categories::operations::{
    add_category, delete_category, initialize_defaults, list_categories, update_category,
};
use crate::categories::processor_enums::{CategoriesProcessorInput, CategoriesProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::commons::PooledConn;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<CategoriesConfig, CategoriesProcessorOutput> for CategoriesProcessorInput {
    async fn process(
        &self,
        _app_config: &mut AppConfig,
        local_config: &mut CategoriesConfig,
        conn: Option<&mut PooledConn>,
    ) -> anyhow::Result<CategoriesProcessorOutput> {
        let app_conn = conn.ok_or_else(|| anyhow!("Failed to get conn"))?;

        match self {
            CategoriesProcessorInput::GetCategories(user_id) => {
                let res = list_categories(app_conn, *user_id)?;
                Ok(CategoriesProcessorOutput::GetCategories(res))
            }
            CategoriesProcessorInput::AddCategory(args) => {
                let res = add_category(app_conn, args)?;
                Ok(CategoriesProcessorOutput::AddCategory(res))
            }
            CategoriesProcessorInput::UpdateCategory(args) => {
                let res = update_category(app_conn, args)?;
                Ok(CategoriesProcessorOutput::UpdateCategory(res))
            }
            CategoriesProcessorInput::DeleteCategory(category_id) => {
                delete_category(app_conn, *category_id)?;
                Ok(CategoriesProcessorOutput::DeleteCategory)
            }
            CategoriesProcessorInput::InitializeDefaults(user_id) => {
                let created =
                    initialize_defaults(app_conn, *user_id, &local_config.default_categories)?;
                Ok(CategoriesProcessorOutput::InitializeDefaults(created))
            }
        }
    }
}
