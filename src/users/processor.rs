use anyhow::anyhow;

use crate::users::operations::{get_user, register_user};
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::commons::PooledConn;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<(), UsersProcessorOutput> for UsersProcessorInput {
    async fn process(
        &self,
        _app_config: &mut AppConfig,
        _local_config: &mut (),
        conn: Option<&mut PooledConn>,
    ) -> anyhow::Result<UsersProcessorOutput> {
        let app_conn = conn.ok_or_else(|| anyhow!("Failed to get conn"))?;

        match self {
            UsersProcessorInput::Register(args) => {
                let res = register_user(app_conn, args)?;
                Ok(UsersProcessorOutput::Register(res))
            }
            UsersProcessorInput::GetUser(args) => {
                let user = get_user(app_conn, args)?;
                Ok(UsersProcessorOutput::GetUser(user))
            }
        }
    }
}
