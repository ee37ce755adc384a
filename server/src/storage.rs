//! The storage abstraction behind the mock API surface.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use async_trait::async_trait;
use types::Result;
use types::monitor::{ErrorLog, SystemStatus, UserStats};
use types::settings::Settings;
use types::society::{
    Building, BuildingPatch, NewBuilding, NewSociety, Society, SocietyValidation,
};
use types::user::{ManagedUser, NewUser, UserPatch};
use types::visitor::{NewVisitor, Visitor, VisitorStatus};
use uuid::Uuid;

pub use memory::MemoryStore;

mod memory;

/// The mock API surface. Every operation is async and simulates network
/// latency; none performs real I/O. A real backend implements this trait
/// behind the same signatures without touching callers.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn validate_society(&self, code: &str) -> Result<SocietyValidation>;
    async fn societies(&self) -> Result<Vec<Society>>;
    async fn create_society(&self, new: NewSociety) -> Result<Society>;

    async fn buildings(&self, society_id: Option<Uuid>) -> Result<Vec<Building>>;
    async fn create_building(&self, new: NewBuilding) -> Result<Building>;
    async fn update_building(&self, id: Uuid, patch: BuildingPatch) -> Result<Building>;
    async fn delete_building(&self, id: Uuid) -> Result<()>;

    async fn users(&self) -> Result<Vec<ManagedUser>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<ManagedUser>>;
    async fn create_user(&self, new: NewUser) -> Result<ManagedUser>;
    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<ManagedUser>;
    async fn delete_user(&self, id: Uuid) -> Result<()>;

    async fn visitors(&self) -> Result<Vec<Visitor>>;
    async fn create_visitor(&self, new: NewVisitor) -> Result<Visitor>;
    async fn set_visitor_status(&self, id: Uuid, status: VisitorStatus) -> Result<Visitor>;

    async fn system_status(&self) -> Result<SystemStatus>;
    async fn error_logs(&self, limit: usize) -> Result<Vec<ErrorLog>>;
    async fn user_stats(&self) -> Result<UserStats>;

    async fn settings(&self) -> Result<Settings>;
    async fn update_settings(&self, settings: Settings) -> Result<Settings>;
}

/// The process-wide store, seeded with demo data.
pub static STORE: LazyLock<Arc<dyn Storage>> = LazyLock::new(|| {
    Arc::new(MemoryStore::seeded(
        Duration::from_millis(crate::CONFIG.read_latency_ms),
        Duration::from_millis(crate::CONFIG.write_latency_ms),
    ))
});
