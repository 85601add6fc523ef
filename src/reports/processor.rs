use anyhow::anyhow;

use crate::reports::operations::{category_monthly_totals, monthly_summary};
use crate::reports::period::Period;
use crate::reports::processor_enums::{ReportsProcessorInput, ReportsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::commons::PooledConn;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<(), ReportsProcessorOutput> for ReportsProcessorInput {
    async fn process(
        &self,
        _app_config: &mut AppConfig,
        _local_config: &mut (),
        conn: Option<&mut PooledConn>,
    ) -> anyhow::Result<ReportsProcessorOutput> {
        let app_conn = conn.ok_or_else(|| anyhow!("Failed to get conn"))?;

        match self {
            ReportsProcessorInput::CategoryTotals(args) => {
                let report = category_monthly_totals(&mut **app_conn, args.user_id, args.category_id)?;
                Ok(ReportsProcessorOutput::CategoryTotals(report))
            }
            ReportsProcessorInput::MonthlySummary(args) => {
                let period = Period::new(args.year, args.month)?;
                let summary = monthly_summary(&mut **app_conn, args.user_id, period)?;
                Ok(ReportsProcessorOutput::MonthlySummary(summary))
            }
        }
    }
}
