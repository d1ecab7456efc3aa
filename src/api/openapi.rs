//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, client_access, communications, executives, health, live_updates, maintenance, payments,
    personnel, photo_logs, projects, properties, settings, stats, vendors, visitors, visits,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grand City API",
        version = "0.3.0",
        description = "Property management and guest-pass REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Grand City Estates", email = "dev@grandcity.example")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::verify,
        // Visits
        visits::list_visits,
        visits::create_visit,
        visits::generate_code,
        visits::update_visit,
        visits::validate_visit,
        visits::checkin_visit,
        visits::checkout_visit,
        visits::delete_visit,
        // Visitors
        visitors::list_visitors,
        visitors::create_visitor,
        visitors::update_visitor,
        visitors::delete_visitor,
        // Executives
        executives::list_executives,
        executives::create_executive,
        executives::update_executive,
        executives::deactivate_executive,
        // Settings
        settings::list_settings,
        settings::update_setting,
        // Live updates
        live_updates::live_updates,
        // Properties
        properties::list_properties,
        properties::create_property,
        properties::update_property,
        properties::delete_property,
        // Maintenance schedules
        maintenance::list_schedules,
        maintenance::create_schedule,
        maintenance::update_schedule,
        maintenance::delete_schedule,
        // Vendors
        vendors::list_vendors,
        vendors::create_vendor,
        vendors::update_vendor,
        vendors::delete_vendor,
        // Payments
        payments::list_payments,
        payments::create_payment,
        payments::update_payment,
        payments::delete_payment,
        // Projects
        projects::list_projects,
        projects::create_project,
        projects::update_project,
        projects::delete_project,
        // Photo logs & comments
        photo_logs::list_photo_logs,
        photo_logs::create_photo_log,
        photo_logs::delete_photo_log,
        photo_logs::list_comments,
        photo_logs::create_comment,
        photo_logs::delete_comment,
        // Client access
        client_access::list_client_access,
        client_access::create_client_access,
        client_access::update_client_access,
        client_access::delete_client_access,
        // Communications
        communications::list_communications,
        communications::create_communication,
        communications::update_communication,
        communications::delete_communication,
        // Personnel
        personnel::list_personnel,
        personnel::create_personnel,
        personnel::update_personnel,
        personnel::delete_personnel,
        // Stats
        stats::get_dashboard_stats,
        stats::refresh_dashboard_stats,
        stats::get_guestpass_stats,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            // Auth
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::user::UserInfo,
            auth::LogoutResponse,
            auth::VerifyResponse,
            // Visits
            crate::models::enums::VisitType,
            crate::models::enums::VisitStatus,
            crate::models::enums::ApprovalStatus,
            crate::models::visit::Visit,
            crate::models::visit::VisitDetails,
            crate::models::visit::CreateVisit,
            crate::models::visit::UpdateVisit,
            crate::models::visit::ValidateVisit,
            crate::models::visit::ValidationResult,
            crate::models::visit::VisitCodePreview,
            crate::models::visitor::Visitor,
            crate::models::visitor::VisitorInfo,
            crate::models::visitor::CreateVisitor,
            crate::models::visitor::UpdateVisitor,
            visits::VisitResponse,
            // Executives
            crate::models::executive::Executive,
            crate::models::executive::ExecutiveDetails,
            crate::models::executive::CreateExecutive,
            crate::models::executive::UpdateExecutive,
            // Settings
            crate::models::setting::SystemSetting,
            crate::models::setting::UpdateSetting,
            // Properties
            crate::models::property::Property,
            crate::models::property::PropertyWithCounts,
            crate::models::property::CreateProperty,
            crate::models::property::UpdateProperty,
            crate::models::property::DeletedProperty,
            // Maintenance
            crate::models::maintenance::MaintenanceSchedule,
            crate::models::maintenance::CreateMaintenanceSchedule,
            crate::models::maintenance::UpdateMaintenanceSchedule,
            // Vendors
            crate::models::vendor::Vendor,
            crate::models::vendor::CreateVendor,
            crate::models::vendor::UpdateVendor,
            // Payments
            crate::models::payment::Payment,
            crate::models::payment::CreatePayment,
            crate::models::payment::UpdatePayment,
            // Projects
            crate::models::project::Project,
            crate::models::project::CreateProject,
            crate::models::project::UpdateProject,
            // Photo logs
            crate::models::photo_log::PhotoLog,
            crate::models::photo_log::PhotoComment,
            crate::models::photo_log::CreatePhotoLog,
            crate::models::photo_log::CreatePhotoComment,
            // Client access
            crate::models::client_access::ClientAccess,
            crate::models::client_access::CreateClientAccess,
            crate::models::client_access::UpdateClientAccess,
            // Communications
            crate::models::communication::Communication,
            crate::models::communication::CreateCommunication,
            crate::models::communication::UpdateCommunication,
            // Personnel
            crate::models::personnel::Personnel,
            crate::models::personnel::CreatePersonnel,
            crate::models::personnel::UpdatePersonnel,
            // Stats
            crate::models::dashboard_stats::DashboardStats,
            crate::models::dashboard_stats::GuestPassStats,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "visits", description = "Visit and pass management"),
        (name = "visitors", description = "Visitor records"),
        (name = "executives", description = "Executive profiles"),
        (name = "settings", description = "System settings"),
        (name = "live-updates", description = "Change notification stream"),
        (name = "properties", description = "Property management"),
        (name = "maintenance", description = "Maintenance scheduling"),
        (name = "vendors", description = "Vendor directory"),
        (name = "payments", description = "Payables and receivables"),
        (name = "projects", description = "Project tracking"),
        (name = "photo-logs", description = "Field photo logs"),
        (name = "client-access", description = "Client portal access"),
        (name = "communications", description = "Project communications"),
        (name = "personnel", description = "Staff directory"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
