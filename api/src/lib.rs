//! The operation surface consumed by the web views. Every operation routes
//! through the storage layer, which simulates latency; a real backend slots
//! in behind the same signatures.
//!
//! List operations apply the role filter before any search or status
//! sub-filter, so a search can never surface an out-of-scope record.

use dioxus::prelude::*;
use types::{
    Identity, Role, rbac,
    monitor::{ErrorLog, MonitorSnapshot, SystemStatus, UserStats},
    settings::Settings,
    society::{Building, BuildingPatch, NewBuilding, NewSociety, Society, SocietyValidation},
    user::{ManagedUser, NewUser, UserPatch, UserQuery},
    visitor::{NewVisitor, Visitor, VisitorQuery, VisitorStatus},
};
use uuid::Uuid;

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<Identity>> {
    match server::get_session_from_cookie().await {
        Ok(identity) => Ok(Some(identity)),
        Err(_) => Ok(None),
    }
}

#[post("/api/societies/validate")]
pub async fn validate_society(code: String) -> ServerFnResult<SocietyValidation> {
    server::require_session().await?;
    Ok(server::STORE.validate_society(&code).await?)
}

#[post("/api/societies")]
pub async fn get_societies() -> ServerFnResult<Vec<Society>> {
    server::require_capability(Role::can_manage_buildings).await?;
    Ok(server::STORE.societies().await?)
}

#[post("/api/societies/create")]
pub async fn create_society(new: NewSociety) -> ServerFnResult<Society> {
    server::require_capability(Role::can_manage_buildings).await?;
    Ok(server::STORE.create_society(new).await?)
}

#[post("/api/buildings")]
pub async fn get_buildings(society_id: Option<Uuid>) -> ServerFnResult<Vec<Building>> {
    server::require_capability(Role::can_manage_buildings).await?;
    Ok(server::STORE.buildings(society_id).await?)
}

#[post("/api/buildings/create")]
pub async fn create_building(new: NewBuilding) -> ServerFnResult<Building> {
    server::require_capability(Role::can_manage_buildings).await?;
    Ok(server::STORE.create_building(new).await?)
}

#[post("/api/buildings/update")]
pub async fn update_building(id: Uuid, patch: BuildingPatch) -> ServerFnResult<Building> {
    server::require_capability(Role::can_manage_buildings).await?;
    Ok(server::STORE.update_building(id, patch).await?)
}

#[post("/api/buildings/delete")]
pub async fn delete_building(id: Uuid) -> ServerFnResult<()> {
    server::require_capability(Role::can_manage_buildings).await?;
    Ok(server::STORE.delete_building(id).await?)
}

#[post("/api/users")]
pub async fn get_users(query: UserQuery) -> ServerFnResult<Vec<ManagedUser>> {
    let identity = server::require_session().await?;

    let users = server::STORE.users().await?;
    let users = rbac::visible_records(identity.role, identity.scope(), users);
    let users = rbac::filter_search(users, &query.search);
    let users = rbac::filter_role(users, query.role);
    let users = rbac::filter_status(users, query.status);

    Ok(users)
}

#[post("/api/users/create")]
pub async fn create_user(new: NewUser) -> ServerFnResult<ManagedUser> {
    server::require_capability(Role::can_manage_users).await?;
    Ok(server::STORE.create_user(new).await?)
}

#[post("/api/users/update")]
pub async fn update_user(id: Uuid, patch: UserPatch) -> ServerFnResult<ManagedUser> {
    server::require_capability(Role::can_manage_users).await?;
    Ok(server::STORE.update_user(id, patch).await?)
}

#[post("/api/users/delete")]
pub async fn delete_user(id: Uuid) -> ServerFnResult<()> {
    server::require_capability(Role::can_manage_users).await?;
    Ok(server::STORE.delete_user(id).await?)
}

#[post("/api/visitors")]
pub async fn get_visitors(query: VisitorQuery) -> ServerFnResult<Vec<Visitor>> {
    let identity = server::require_session().await?;

    let visitors = server::STORE.visitors().await?;
    let visitors = rbac::visible_records(identity.role, identity.scope(), visitors);
    let visitors = rbac::filter_search(visitors, &query.search);
    let visitors = rbac::filter_visitor_status(visitors, query.status);

    Ok(visitors)
}

#[post("/api/visitors/create")]
pub async fn create_visitor(new: NewVisitor) -> ServerFnResult<Visitor> {
    server::require_capability(Role::can_create_visitors).await?;
    Ok(server::STORE.create_visitor(new).await?)
}

#[post("/api/visitors/status")]
pub async fn set_visitor_status(id: Uuid, status: VisitorStatus) -> ServerFnResult<Visitor> {
    server::require_capability(Role::can_review_visitors).await?;
    Ok(server::STORE.set_visitor_status(id, status).await?)
}

/// Fresh metrics, fetched through the (latency-simulating) store. Used by
/// the manual refresh on the monitoring screen.
#[post("/api/monitoring/status")]
pub async fn get_system_status() -> ServerFnResult<SystemStatus> {
    server::require_capability(Role::can_view_monitoring).await?;
    Ok(server::STORE.system_status().await?)
}

#[post("/api/monitoring/logs")]
pub async fn get_error_logs(limit: usize) -> ServerFnResult<Vec<ErrorLog>> {
    server::require_capability(Role::can_view_monitoring).await?;
    Ok(server::STORE.error_logs(limit).await?)
}

/// The snapshot maintained by the background refresher; cheap to read.
#[post("/api/monitoring/snapshot")]
pub async fn get_monitor_snapshot() -> ServerFnResult<MonitorSnapshot> {
    server::require_capability(Role::can_view_monitoring).await?;
    Ok(server::monitor::snapshot().await)
}

#[post("/api/stats")]
pub async fn get_user_stats() -> ServerFnResult<UserStats> {
    server::require_session().await?;
    Ok(server::STORE.user_stats().await?)
}

#[post("/api/settings")]
pub async fn get_settings() -> ServerFnResult<Settings> {
    server::require_capability(Role::can_edit_settings).await?;
    Ok(server::STORE.settings().await?)
}

#[post("/api/settings/update")]
pub async fn update_settings(settings: Settings) -> ServerFnResult<Settings> {
    server::require_capability(Role::can_edit_settings).await?;
    Ok(server::STORE.update_settings(settings).await?)
}
