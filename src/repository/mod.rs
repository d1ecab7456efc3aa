//! Repository layer for database operations

pub mod client_access;
pub mod communications;
pub mod dashboard_stats;
pub mod executives;
pub mod maintenance;
pub mod payments;
pub mod personnel;
pub mod photo_logs;
pub mod projects;
pub mod properties;
pub mod settings;
pub mod users;
pub mod vendors;
pub mod visitors;
pub mod visits;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub visitors: visitors::VisitorsRepository,
    pub visits: visits::VisitsRepository,
    pub executives: executives::ExecutivesRepository,
    pub users: users::UsersRepository,
    pub settings: settings::SettingsRepository,
    pub properties: properties::PropertiesRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub vendors: vendors::VendorsRepository,
    pub payments: payments::PaymentsRepository,
    pub projects: projects::ProjectsRepository,
    pub photo_logs: photo_logs::PhotoLogsRepository,
    pub client_access: client_access::ClientAccessRepository,
    pub communications: communications::CommunicationsRepository,
    pub personnel: personnel::PersonnelRepository,
    pub dashboard_stats: dashboard_stats::DashboardStatsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            visits: visits::VisitsRepository::new(pool.clone()),
            executives: executives::ExecutivesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            settings: settings::SettingsRepository::new(pool.clone()),
            properties: properties::PropertiesRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            vendors: vendors::VendorsRepository::new(pool.clone()),
            payments: payments::PaymentsRepository::new(pool.clone()),
            projects: projects::ProjectsRepository::new(pool.clone()),
            photo_logs: photo_logs::PhotoLogsRepository::new(pool.clone()),
            client_access: client_access::ClientAccessRepository::new(pool.clone()),
            communications: communications::CommunicationsRepository::new(pool.clone()),
            personnel: personnel::PersonnelRepository::new(pool.clone()),
            dashboard_stats: dashboard_stats::DashboardStatsRepository::new(pool.clone()),
            pool,
        }
    }
}
