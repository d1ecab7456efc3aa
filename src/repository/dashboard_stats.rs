//! Dashboard stats repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::dashboard_stats::DashboardStats};

#[derive(Clone)]
pub struct DashboardStatsRepository {
    pool: Pool<Postgres>,
}

impl DashboardStatsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Fetch the most recently dated snapshot, if any
    pub async fn latest(&self) -> AppResult<Option<DashboardStats>> {
        let row = sqlx::query_as::<_, DashboardStats>(
            "SELECT * FROM dashboard_stats ORDER BY stats_date DESC, created_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Invoke the database-side aggregation procedure
    pub async fn refresh(&self) -> AppResult<()> {
        sqlx::query("SELECT update_dashboard_stats()")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
