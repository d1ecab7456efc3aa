//! Statistics service: dashboard snapshots and guest-pass counters

use crate::{
    error::AppResult,
    models::dashboard_stats::{DashboardStats, GuestPassStats},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Latest dashboard snapshot, or the all-zero default when none exists
    pub async fn dashboard_latest(&self) -> AppResult<DashboardStats> {
        Ok(self
            .repository
            .dashboard_stats
            .latest()
            .await?
            .unwrap_or_else(DashboardStats::empty))
    }

    /// Recompute the snapshot via the database procedure, then return it
    pub async fn dashboard_refresh(&self) -> AppResult<DashboardStats> {
        self.repository.dashboard_stats.refresh().await?;
        self.dashboard_latest().await
    }

    /// Current database time; used by the health endpoints as a liveness probe
    pub async fn database_time(&self) -> AppResult<chrono::DateTime<chrono::Utc>> {
        let now: chrono::DateTime<chrono::Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.repository.pool)
            .await?;
        Ok(now)
    }

    /// Live counters for the guest-pass dashboard
    pub async fn guestpass(&self) -> AppResult<GuestPassStats> {
        let today_visits = self.repository.visits.count_today().await?;
        let ongoing_visits = self.repository.visits.count_ongoing().await?;
        let total_visitors = self.repository.visitors.count().await?;
        Ok(GuestPassStats {
            today_visits,
            ongoing_visits,
            total_visitors,
        })
    }
}
