use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::AccountStatus;
use crate::rbac::{Scoped, Searchable};
use crate::role::Role;

/// A directory record managed from the user screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub society: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub flat: Option<String>,
    pub status: AccountStatus,
    pub avatar: Option<String>,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub society: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub flat: Option<String>,
}

/// Partial update for a directory user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub society: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub flat: Option<String>,
    pub status: Option<AccountStatus>,
}

/// Filters accepted by the user list operation. Applied after RBAC.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    pub search: String,
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
}

impl Scoped for ManagedUser {
    fn society(&self) -> Option<&str> {
        self.society.as_deref()
    }

    fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }

    // A secretary's society-wide view covers residents only.
    fn society_audience(&self) -> bool {
        self.role == Role::Resident
    }
}

impl Searchable for ManagedUser {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(phone) = self.phone.as_deref() {
            fields.push(phone);
        }
        fields
    }
}
