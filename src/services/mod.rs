//! Business logic services

pub mod auth;
pub mod changes;
pub mod client_access;
pub mod communications;
pub mod executives;
pub mod guard;
pub mod maintenance;
pub mod payments;
pub mod personnel;
pub mod photo_logs;
pub mod projects;
pub mod properties;
pub mod proxy;
pub mod settings;
pub mod stats;
pub mod vendors;
pub mod visitors;
pub mod visits;

use crate::{
    config::{AuthConfig, ProxyConfig},
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub guard: guard::AdminGuard,
    pub visits: visits::VisitsService,
    pub visitors: visitors::VisitorsService,
    pub executives: executives::ExecutivesService,
    pub settings: settings::SettingsService,
    pub properties: properties::PropertiesService,
    pub maintenance: maintenance::MaintenanceService,
    pub vendors: vendors::VendorsService,
    pub payments: payments::PaymentsService,
    pub projects: projects::ProjectsService,
    pub photo_logs: photo_logs::PhotoLogsService,
    pub client_access: client_access::ClientAccessService,
    pub communications: communications::CommunicationsService,
    pub personnel: personnel::PersonnelService,
    pub stats: stats::StatsService,
    pub proxy: proxy::ProxyService,
    pub changes: changes::ChangeFeed,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        proxy_config: ProxyConfig,
        changes: changes::ChangeFeed,
    ) -> AppResult<Self> {
        Ok(Self {
            auth: auth::AuthService::new(repository.clone(), auth_config.clone()),
            guard: guard::AdminGuard::new(&auth_config.admin_password_hash)?,
            visits: visits::VisitsService::new(repository.clone()),
            visitors: visitors::VisitorsService::new(repository.clone()),
            executives: executives::ExecutivesService::new(repository.clone()),
            settings: settings::SettingsService::new(repository.clone()),
            properties: properties::PropertiesService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            vendors: vendors::VendorsService::new(repository.clone()),
            payments: payments::PaymentsService::new(repository.clone()),
            projects: projects::ProjectsService::new(repository.clone()),
            photo_logs: photo_logs::PhotoLogsService::new(repository.clone()),
            client_access: client_access::ClientAccessService::new(repository.clone()),
            communications: communications::CommunicationsService::new(repository.clone()),
            personnel: personnel::PersonnelService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
            proxy: proxy::ProxyService::new(&proxy_config.guestpass_url),
            changes,
        })
    }
}
