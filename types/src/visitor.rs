use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rbac::{Scoped, Searchable};

/// Lifecycle of a visitor record, from registration to departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorStatus {
    Pending,
    Approved,
    CheckedIn,
    CheckedOut,
    Rejected,
}

impl VisitorStatus {
    pub const ALL: [VisitorStatus; 5] = [
        VisitorStatus::Pending,
        VisitorStatus::Approved,
        VisitorStatus::CheckedIn,
        VisitorStatus::CheckedOut,
        VisitorStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorStatus::Pending => "pending",
            VisitorStatus::Approved => "approved",
            VisitorStatus::CheckedIn => "checked_in",
            VisitorStatus::CheckedOut => "checked_out",
            VisitorStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisitorStatus::Pending => "Pending",
            VisitorStatus::Approved => "Approved",
            VisitorStatus::CheckedIn => "Checked In",
            VisitorStatus::CheckedOut => "Checked Out",
            VisitorStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visitor registered against a host flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub purpose: String,
    pub host_name: String,
    pub host_flat: String,
    pub society: Option<String>,
    pub building: Option<String>,
    pub status: VisitorStatus,
    pub check_in_time: Option<Timestamp>,
    pub check_out_time: Option<Timestamp>,
    pub vehicle_number: Option<String>,
    pub qr_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVisitor {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub purpose: String,
    pub host_name: String,
    pub host_flat: String,
    pub society: Option<String>,
    pub building: Option<String>,
    pub vehicle_number: Option<String>,
}

/// Filters accepted by the visitor list operation. Applied after RBAC.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitorQuery {
    pub search: String,
    pub status: Option<VisitorStatus>,
}

impl Scoped for Visitor {
    fn society(&self) -> Option<&str> {
        self.society.as_deref()
    }

    fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }
}

impl Searchable for Visitor {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.host_name.as_str(),
            self.purpose.as_str(),
        ];
        if let Some(email) = self.email.as_deref() {
            fields.push(email);
        }
        fields
    }
}
