//! In-memory store seeded with demo data. Stands in for a real backend;
//! every call sleeps for the configured latency before touching state.

use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;
use types::monitor::{ErrorLog, LogLevel, ServiceHealth, SystemStatus, UserStats};
use types::settings::Settings;
use types::society::{
    Building, BuildingPatch, NewBuilding, NewSociety, Society, SocietyValidation, Wing,
};
use types::user::{ManagedUser, NewUser, UserPatch};
use types::visitor::{NewVisitor, Visitor, VisitorStatus};
use types::{AccountStatus, Error, Result, Role};
use uuid::Uuid;

use crate::storage::Storage;

pub struct MemoryStore {
    read_latency: Duration,
    write_latency: Duration,
    state: RwLock<State>,
}

struct State {
    societies: Vec<Society>,
    buildings: Vec<Building>,
    users: Vec<ManagedUser>,
    visitors: Vec<Visitor>,
    status: SystemStatus,
    error_logs: Vec<ErrorLog>,
    stats: UserStats,
    settings: Settings,
}

impl MemoryStore {
    /// An empty store.
    pub fn new(read_latency: Duration, write_latency: Duration) -> Self {
        Self {
            read_latency,
            write_latency,
            state: RwLock::new(State::empty()),
        }
    }

    /// A store pre-populated with the demo dataset.
    pub fn seeded(read_latency: Duration, write_latency: Duration) -> Self {
        Self {
            read_latency,
            write_latency,
            state: RwLock::new(State::seeded()),
        }
    }

    async fn read_delay(&self) {
        tokio::time::sleep(self.read_latency).await;
    }

    async fn write_delay(&self) {
        tokio::time::sleep(self.write_latency).await;
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn validate_society(&self, code: &str) -> Result<SocietyValidation> {
        self.read_delay().await;
        let state = self.state.read().await;
        let society = state.societies.iter().find(|s| s.code == code).cloned();
        Ok(SocietyValidation {
            valid: society.is_some(),
            society,
        })
    }

    async fn societies(&self) -> Result<Vec<Society>> {
        self.read_delay().await;
        Ok(self.state.read().await.societies.clone())
    }

    async fn create_society(&self, new: NewSociety) -> Result<Society> {
        self.write_delay().await;
        let society = Society {
            id: Uuid::new_v4(),
            name: new.name,
            code: new.code,
            address: new.address,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
            contact_email: new.contact_email,
            contact_phone: new.contact_phone,
        };
        let mut state = self.state.write().await;
        state.societies.push(society.clone());
        tracing::debug!(id = %society.id, name = %society.name, "created society");
        Ok(society)
    }

    async fn buildings(&self, society_id: Option<Uuid>) -> Result<Vec<Building>> {
        self.read_delay().await;
        let state = self.state.read().await;
        Ok(match society_id {
            Some(society_id) => state
                .buildings
                .iter()
                .filter(|b| b.society_id == society_id)
                .cloned()
                .collect(),
            None => state.buildings.clone(),
        })
    }

    async fn create_building(&self, new: NewBuilding) -> Result<Building> {
        self.write_delay().await;
        let mut state = self.state.write().await;
        state.require_society(new.society_id)?;

        let id = Uuid::new_v4();
        let wings = new
            .wings
            .into_iter()
            .map(|w| Wing {
                id: Uuid::new_v4(),
                name: w.name,
                building_id: id,
                floors: w.floors,
                flats_per_floor: w.flats_per_floor,
            })
            .collect();
        let building = Building {
            id,
            name: new.name,
            society_id: new.society_id,
            wings,
            total_floors: new.total_floors,
            total_flats: new.total_flats,
        };
        state.buildings.push(building.clone());
        tracing::debug!(id = %building.id, name = %building.name, "created building");
        Ok(building)
    }

    async fn update_building(&self, id: Uuid, patch: BuildingPatch) -> Result<Building> {
        self.write_delay().await;
        let mut state = self.state.write().await;
        if let Some(society_id) = patch.society_id {
            state.require_society(society_id)?;
        }

        let building = state
            .buildings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::not_found("building", id))?;

        if let Some(name) = patch.name {
            building.name = name;
        }
        if let Some(society_id) = patch.society_id {
            building.society_id = society_id;
        }
        if let Some(total_floors) = patch.total_floors {
            building.total_floors = total_floors;
        }
        if let Some(total_flats) = patch.total_flats {
            building.total_flats = total_flats;
        }
        Ok(building.clone())
    }

    async fn delete_building(&self, id: Uuid) -> Result<()> {
        self.write_delay().await;
        let mut state = self.state.write().await;
        let before = state.buildings.len();
        state.buildings.retain(|b| b.id != id);
        if state.buildings.len() == before {
            return Err(Error::not_found("building", id));
        }
        tracing::debug!(%id, "deleted building");
        Ok(())
    }

    async fn users(&self) -> Result<Vec<ManagedUser>> {
        self.read_delay().await;
        Ok(self.state.read().await.users.clone())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<ManagedUser>> {
        self.read_delay().await;
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, new: NewUser) -> Result<ManagedUser> {
        self.write_delay().await;
        let user = ManagedUser {
            id: Uuid::new_v4(),
            email: new.email,
            name: new.name,
            phone: new.phone,
            role: new.role.unwrap_or(Role::Resident),
            society: new.society,
            building: new.building,
            floor: new.floor,
            flat: new.flat,
            status: AccountStatus::Active,
            avatar: None,
            created_at: Some(Timestamp::now()),
        };
        let mut state = self.state.write().await;
        state.users.push(user.clone());
        tracing::debug!(id = %user.id, email = %user.email, "created user");
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<ManagedUser> {
        self.write_delay().await;
        let mut state = self.state.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::not_found("user", id))?;

        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(society) = patch.society {
            user.society = Some(society);
        }
        if let Some(building) = patch.building {
            user.building = Some(building);
        }
        if let Some(floor) = patch.floor {
            user.floor = Some(floor);
        }
        if let Some(flat) = patch.flat {
            user.flat = Some(flat);
        }
        if let Some(status) = patch.status {
            user.status = status;
        }
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> Result<()> {
        self.write_delay().await;
        let mut state = self.state.write().await;
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(Error::not_found("user", id));
        }
        tracing::debug!(%id, "deleted user");
        Ok(())
    }

    async fn visitors(&self) -> Result<Vec<Visitor>> {
        self.read_delay().await;
        Ok(self.state.read().await.visitors.clone())
    }

    async fn create_visitor(&self, new: NewVisitor) -> Result<Visitor> {
        self.write_delay().await;
        let id = Uuid::new_v4();
        let visitor = Visitor {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            purpose: new.purpose,
            host_name: new.host_name,
            host_flat: new.host_flat,
            society: new.society,
            building: new.building,
            status: VisitorStatus::Pending,
            check_in_time: None,
            check_out_time: None,
            vehicle_number: new.vehicle_number,
            qr_code: Some(qr_for(id)),
        };
        let mut state = self.state.write().await;
        state.visitors.push(visitor.clone());
        tracing::debug!(id = %visitor.id, name = %visitor.name, "registered visitor");
        Ok(visitor)
    }

    async fn set_visitor_status(&self, id: Uuid, status: VisitorStatus) -> Result<Visitor> {
        self.write_delay().await;
        let mut state = self.state.write().await;
        let visitor = state
            .visitors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::not_found("visitor", id))?;

        visitor.status = status;
        match status {
            VisitorStatus::CheckedIn if visitor.check_in_time.is_none() => {
                visitor.check_in_time = Some(Timestamp::now());
            }
            VisitorStatus::CheckedOut if visitor.check_out_time.is_none() => {
                visitor.check_out_time = Some(Timestamp::now());
            }
            _ => {}
        }
        Ok(visitor.clone())
    }

    async fn system_status(&self) -> Result<SystemStatus> {
        self.read_delay().await;
        Ok(self.state.read().await.status.clone())
    }

    async fn error_logs(&self, limit: usize) -> Result<Vec<ErrorLog>> {
        self.read_delay().await;
        let state = self.state.read().await;
        Ok(state.error_logs.iter().take(limit).cloned().collect())
    }

    async fn user_stats(&self) -> Result<UserStats> {
        self.read_delay().await;
        Ok(self.state.read().await.stats.clone())
    }

    async fn settings(&self) -> Result<Settings> {
        self.read_delay().await;
        Ok(self.state.read().await.settings.clone())
    }

    async fn update_settings(&self, settings: Settings) -> Result<Settings> {
        self.write_delay().await;
        let mut state = self.state.write().await;
        state.settings = settings;
        Ok(state.settings.clone())
    }
}

impl State {
    fn empty() -> Self {
        Self {
            societies: Vec::new(),
            buildings: Vec::new(),
            users: Vec::new(),
            visitors: Vec::new(),
            status: SystemStatus {
                uptime: 100.0,
                active_users: 0,
                active_sessions: 0,
                error_count: 0,
                last_error: None,
                db_status: ServiceHealth::Healthy,
                api_status: ServiceHealth::Healthy,
            },
            error_logs: Vec::new(),
            stats: UserStats {
                total_residents: 0,
                active_visitors: 0,
                pending_maintenance: 0,
                active_security_personnel: 0,
            },
            settings: Settings::default(),
        }
    }

    fn require_society(&self, id: Uuid) -> Result<()> {
        if self.societies.iter().any(|s| s.id == id) {
            Ok(())
        } else {
            Err(Error::not_found("society", id))
        }
    }

    fn seeded() -> Self {
        let sunset = seed_id(0x01);
        let blue_hills = seed_id(0x02);
        let tower_a = seed_id(0x11);
        let tower_b = seed_id(0x12);

        let societies = vec![
            Society {
                id: sunset,
                name: "Sunset Gardens".into(),
                code: "SUNSET001".into(),
                address: "123 Sunset Boulevard".into(),
                city: "Mumbai".into(),
                state: "Maharashtra".into(),
                zip_code: Some("400001".into()),
                contact_email: Some("admin@sunsetgardens.com".into()),
                contact_phone: Some("+91-98765-43210".into()),
            },
            Society {
                id: blue_hills,
                name: "Blue Hills Society".into(),
                code: "BLUE002".into(),
                address: "456 Blue Hills Drive".into(),
                city: "Pune".into(),
                state: "Maharashtra".into(),
                zip_code: Some("411001".into()),
                contact_email: Some("admin@bluehills.com".into()),
                contact_phone: Some("+91-98765-43211".into()),
            },
        ];

        let buildings = vec![
            Building {
                id: tower_a,
                name: "Tower A".into(),
                society_id: sunset,
                wings: vec![
                    seed_wing(0x21, "A1", tower_a, 10, 2),
                    seed_wing(0x22, "A2", tower_a, 10, 2),
                ],
                total_floors: 10,
                total_flats: 40,
            },
            Building {
                id: tower_b,
                name: "Tower B".into(),
                society_id: sunset,
                wings: vec![
                    seed_wing(0x23, "B1", tower_b, 12, 2),
                    seed_wing(0x24, "B2", tower_b, 12, 2),
                ],
                total_floors: 12,
                total_flats: 48,
            },
        ];

        let mut john_anderson = seed_user(
            0x31,
            "John Anderson",
            "admin@innovativelabs.com",
            "+1-234-567-8901",
            Role::SuperAdmin,
            None,
            None,
        );
        john_anderson.avatar = Some(
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"
                .into(),
        );

        let mut bob_brown = seed_user(
            0x38,
            "Bob Brown",
            "bob.brown@email.com",
            "+1-234-567-8913",
            Role::Resident,
            Some(("Sunset Gardens", "Tower B")),
            Some(("2", "203")),
        );
        bob_brown.status = AccountStatus::Inactive;

        let users = vec![
            john_anderson,
            seed_user(
                0x32,
                "Sarah Johnson",
                "secretary@innovativelabs.com",
                "+1-234-567-8902",
                Role::Secretary,
                Some(("Sunset Gardens", "Tower A")),
                None,
            ),
            seed_user(
                0x33,
                "Mike Wilson",
                "security@innovativelabs.com",
                "+1-234-567-8903",
                Role::Security,
                Some(("Sunset Gardens", "Tower A")),
                None,
            ),
            seed_user(
                0x34,
                "Alex Chen",
                "dev@innovativelabs.com",
                "+1-234-567-8904",
                Role::Developer,
                None,
                None,
            ),
            seed_user(
                0x35,
                "Ravi Patel",
                "resident@innovativelabs.com",
                "+1-234-567-8905",
                Role::Resident,
                Some(("Sunset Gardens", "Tower A")),
                Some(("7", "701")),
            ),
            seed_user(
                0x36,
                "John Doe",
                "john.doe@email.com",
                "+1-234-567-8911",
                Role::Resident,
                Some(("Sunset Gardens", "Tower A")),
                Some(("5", "502")),
            ),
            seed_user(
                0x37,
                "Jane Smith",
                "jane.smith@email.com",
                "+1-234-567-8912",
                Role::Resident,
                Some(("Sunset Gardens", "Tower A")),
                Some(("3", "304")),
            ),
            bob_brown,
        ];

        let now = Timestamp::now();
        let hour = Duration::from_secs(60 * 60);

        let visitors = vec![
            Visitor {
                id: seed_id(0x41),
                name: "Alex Johnson".into(),
                phone: "+1-234-567-8921".into(),
                email: Some("alex.johnson@email.com".into()),
                purpose: "Business Meeting".into(),
                host_name: "John Doe".into(),
                host_flat: "502".into(),
                society: Some("Sunset Gardens".into()),
                building: Some("Tower A".into()),
                status: VisitorStatus::CheckedIn,
                check_in_time: Some(now - 2 * hour),
                check_out_time: None,
                vehicle_number: Some("MH12AB1234".into()),
                qr_code: Some("QR123456789".into()),
            },
            Visitor {
                id: seed_id(0x42),
                name: "Maria Garcia".into(),
                phone: "+1-234-567-8922".into(),
                email: None,
                purpose: "Family Visit".into(),
                host_name: "Jane Smith".into(),
                host_flat: "304".into(),
                society: Some("Sunset Gardens".into()),
                building: Some("Tower A".into()),
                status: VisitorStatus::Pending,
                check_in_time: None,
                check_out_time: None,
                vehicle_number: None,
                qr_code: Some("QR123456790".into()),
            },
            Visitor {
                id: seed_id(0x43),
                name: "David Wilson".into(),
                phone: "+1-234-567-8923".into(),
                email: Some("david.wilson@delivery.com".into()),
                purpose: "Delivery".into(),
                host_name: "Bob Brown".into(),
                host_flat: "203".into(),
                society: Some("Sunset Gardens".into()),
                building: Some("Tower B".into()),
                status: VisitorStatus::Approved,
                check_in_time: None,
                check_out_time: None,
                vehicle_number: Some("MH12CD5678".into()),
                qr_code: Some("QR123456791".into()),
            },
            Visitor {
                id: seed_id(0x44),
                name: "Sarah Lee".into(),
                phone: "+1-234-567-8924".into(),
                email: None,
                purpose: "Maintenance".into(),
                host_name: "Mike Wilson".into(),
                host_flat: "Security Office".into(),
                society: Some("Sunset Gardens".into()),
                building: Some("Tower A".into()),
                status: VisitorStatus::CheckedOut,
                check_in_time: Some(now - 4 * hour),
                check_out_time: Some(now - hour / 2),
                vehicle_number: None,
                qr_code: Some("QR123456792".into()),
            },
            Visitor {
                id: seed_id(0x45),
                name: "Tom Anderson".into(),
                phone: "+1-234-567-8925".into(),
                email: None,
                purpose: "Personal Visit".into(),
                host_name: "Jane Smith".into(),
                host_flat: "304".into(),
                society: Some("Sunset Gardens".into()),
                building: Some("Tower A".into()),
                status: VisitorStatus::Rejected,
                check_in_time: None,
                check_out_time: None,
                vehicle_number: None,
                qr_code: Some("QR123456793".into()),
            },
        ];

        let error_logs = vec![
            ErrorLog {
                id: seed_id(0x51),
                timestamp: now - hour,
                level: LogLevel::Error,
                message: "Visitor QR generation timeout".into(),
                service: "visitor-api".into(),
                resolved: true,
            },
            ErrorLog {
                id: seed_id(0x52),
                timestamp: now - 2 * hour,
                level: LogLevel::Warning,
                message: "High database connection pool usage".into(),
                service: "database".into(),
                resolved: false,
            },
        ];

        Self {
            societies,
            buildings,
            users,
            visitors,
            status: SystemStatus {
                uptime: 99.8,
                active_users: 234,
                active_sessions: 187,
                error_count: 3,
                last_error: Some("Minor API timeout at visitor registration".into()),
                db_status: ServiceHealth::Healthy,
                api_status: ServiceHealth::Healthy,
            },
            error_logs,
            stats: UserStats {
                total_residents: 156,
                active_visitors: 12,
                pending_maintenance: 8,
                active_security_personnel: 4,
            },
            settings: Settings::default(),
        }
    }
}

fn seed_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn seed_wing(n: u128, name: &str, building_id: Uuid, floors: u32, flats_per_floor: u32) -> Wing {
    Wing {
        id: seed_id(n),
        name: name.into(),
        building_id,
        floors,
        flats_per_floor,
    }
}

fn seed_user(
    n: u128,
    name: &str,
    email: &str,
    phone: &str,
    role: Role,
    place: Option<(&str, &str)>,
    unit: Option<(&str, &str)>,
) -> ManagedUser {
    ManagedUser {
        id: seed_id(n),
        email: email.into(),
        name: name.into(),
        phone: Some(phone.into()),
        role,
        society: place.map(|(society, _)| society.into()),
        building: place.map(|(_, building)| building.into()),
        floor: unit.map(|(floor, _)| floor.into()),
        flat: unit.map(|(_, flat)| flat.into()),
        status: AccountStatus::Active,
        avatar: None,
        created_at: None,
    }
}

fn qr_for(id: Uuid) -> String {
    let simple = id.simple().to_string();
    format!("QR{}", simple[..9].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::society::NewWing;

    fn store() -> MemoryStore {
        MemoryStore::seeded(Duration::ZERO, Duration::ZERO)
    }

    #[tokio::test]
    async fn validate_society_by_code() {
        let s = store();
        let hit = s.validate_society("SUNSET001").await.unwrap();
        assert!(hit.valid);
        assert_eq!(hit.society.unwrap().name, "Sunset Gardens");

        let miss = s.validate_society("NOPE999").await.unwrap();
        assert!(!miss.valid);
        assert!(miss.society.is_none());
    }

    #[tokio::test]
    async fn buildings_filter_by_society() {
        let s = store();
        let all = s.buildings(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let sunset = s.buildings(Some(seed_id(0x01))).await.unwrap();
        assert_eq!(sunset.len(), 2);

        let blue_hills = s.buildings(Some(seed_id(0x02))).await.unwrap();
        assert!(blue_hills.is_empty());
    }

    #[tokio::test]
    async fn create_building_assigns_wing_ids() {
        let s = store();
        let building = s
            .create_building(NewBuilding {
                name: "Tower C".into(),
                society_id: seed_id(0x02),
                wings: vec![NewWing {
                    name: "C1".into(),
                    floors: 8,
                    flats_per_floor: 3,
                }],
                total_floors: 8,
                total_flats: 24,
            })
            .await
            .unwrap();

        assert_eq!(building.wings.len(), 1);
        assert_eq!(building.wings[0].building_id, building.id);
        assert_eq!(s.buildings(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_building_rejects_dangling_society() {
        let s = store();
        let error = s
            .create_building(NewBuilding {
                name: "Orphan".into(),
                society_id: Uuid::new_v4(),
                wings: Vec::new(),
                total_floors: 1,
                total_flats: 1,
            })
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn update_missing_building_is_not_found() {
        let s = store();
        let error = s
            .update_building(
                Uuid::new_v4(),
                BuildingPatch {
                    name: Some("X".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn update_building_applies_partial_fields() {
        let s = store();
        let updated = s
            .update_building(
                seed_id(0x11),
                BuildingPatch {
                    total_floors: Some(11),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.total_floors, 11);
        // Untouched fields survive.
        assert_eq!(updated.name, "Tower A");
        assert_eq!(updated.wings.len(), 2);
    }

    #[tokio::test]
    async fn delete_building_removes_it() {
        let s = store();
        s.delete_building(seed_id(0x12)).await.unwrap();
        assert_eq!(s.buildings(None).await.unwrap().len(), 1);

        let error = s.delete_building(seed_id(0x12)).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn find_user_by_email_is_exact() {
        let s = store();
        let user = s
            .find_user_by_email("admin@innovativelabs.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, Role::SuperAdmin);

        assert!(
            s.find_user_by_email("ADMIN@innovativelabs.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn created_users_default_to_active_residents() {
        let s = store();
        let user = s
            .create_user(NewUser {
                email: "new.resident@email.com".into(),
                name: "New Resident".into(),
                society: Some("Sunset Gardens".into()),
                building: Some("Tower A".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(user.role, Role::Resident);
        assert_eq!(user.status, AccountStatus::Active);
        assert!(user.created_at.is_some());

        let found = s
            .find_user_by_email("new.resident@email.com")
            .await
            .unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn user_update_and_delete() {
        let s = store();
        let updated = s
            .update_user(
                seed_id(0x36),
                UserPatch {
                    status: Some(AccountStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, AccountStatus::Inactive);
        assert_eq!(updated.name, "John Doe");

        s.delete_user(seed_id(0x36)).await.unwrap();
        assert!(s.delete_user(seed_id(0x36)).await.unwrap_err().is_not_found());
        assert!(
            s.update_user(seed_id(0x36), UserPatch::default())
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn visitor_status_transitions_stamp_times() {
        let s = store();
        // Maria Garcia is pending with no timestamps.
        let id = seed_id(0x42);

        let approved = s
            .set_visitor_status(id, VisitorStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.status, VisitorStatus::Approved);
        assert!(approved.check_in_time.is_none());

        let checked_in = s
            .set_visitor_status(id, VisitorStatus::CheckedIn)
            .await
            .unwrap();
        let first_check_in = checked_in.check_in_time.unwrap();

        // Re-checking in does not move the first timestamp.
        let again = s
            .set_visitor_status(id, VisitorStatus::CheckedIn)
            .await
            .unwrap();
        assert_eq!(again.check_in_time, Some(first_check_in));

        let checked_out = s
            .set_visitor_status(id, VisitorStatus::CheckedOut)
            .await
            .unwrap();
        assert!(checked_out.check_out_time.is_some());
    }

    #[tokio::test]
    async fn new_visitors_start_pending_with_a_qr_code() {
        let s = store();
        let visitor = s
            .create_visitor(NewVisitor {
                name: "Walk In".into(),
                phone: "+1-234-567-8999".into(),
                purpose: "Delivery".into(),
                host_name: "Jane Smith".into(),
                host_flat: "304".into(),
                society: Some("Sunset Gardens".into()),
                building: Some("Tower A".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(visitor.status, VisitorStatus::Pending);
        assert!(visitor.qr_code.unwrap().starts_with("QR"));
    }

    #[tokio::test]
    async fn error_logs_honor_the_limit() {
        let s = store();
        assert_eq!(s.error_logs(1).await.unwrap().len(), 1);
        assert_eq!(s.error_logs(50).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn settings_updates_persist() {
        let s = store();
        let mut settings = s.settings().await.unwrap();
        assert!(settings.email_notifications);

        settings.email_notifications = false;
        settings.session_timeout_minutes = 60;
        s.update_settings(settings.clone()).await.unwrap();

        assert_eq!(s.settings().await.unwrap(), settings);
    }
}
