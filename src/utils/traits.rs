use anyhow::Result;

use crate::utils::app_config::AppConfig;
use crate::utils::commons::PooledConn;

pub trait ActionProcessor<Config, Output> {
    async fn process(
        &self,
        app_config: &mut AppConfig,
        local_config: &mut Config,
        conn: Option<&mut PooledConn>,
    ) -> Result<Output>;
}
