use serde::{Deserialize, Serialize};

/// The closed set of roles. A role is assigned when an identity is created
/// and never changes for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Secretary,
    Security,
    Developer,
    Resident,
    Guest,
}

/// Presentation attributes for a role, kept in a single record so the icon,
/// label, description, and color cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMetadata {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Secretary,
        Role::Security,
        Role::Developer,
        Role::Resident,
        Role::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Secretary => "secretary",
            Role::Security => "security",
            Role::Developer => "developer",
            Role::Resident => "resident",
            Role::Guest => "guest",
        }
    }

    pub fn metadata(&self) -> RoleMetadata {
        match self {
            Role::SuperAdmin => RoleMetadata {
                icon: "shield",
                label: "Super Admin",
                description: "Full system access and management",
                color: "destructive",
            },
            Role::Admin => RoleMetadata {
                icon: "user-cog",
                label: "Admin",
                description: "Administrative access to all buildings",
                color: "primary",
            },
            Role::Secretary => RoleMetadata {
                icon: "users",
                label: "Secretary",
                description: "Society and resident management",
                color: "accent",
            },
            Role::Security => RoleMetadata {
                icon: "shield",
                label: "Security",
                description: "Visitor and security management",
                color: "warning",
            },
            Role::Developer => RoleMetadata {
                icon: "code",
                label: "Developer",
                description: "System monitoring and maintenance",
                color: "success",
            },
            Role::Resident => RoleMetadata {
                icon: "users",
                label: "Resident",
                description: "Personal account and services",
                color: "muted",
            },
            Role::Guest => RoleMetadata {
                icon: "users",
                label: "Guest",
                description: "Limited visitor access",
                color: "muted",
            },
        }
    }

    /// Staff roles that may create and edit directory users.
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin | Role::Secretary)
    }

    /// Roles that may register a new visitor.
    pub fn can_create_visitors(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin | Role::Secretary)
    }

    /// Roles that may approve, reject, and check visitors in or out.
    pub fn can_review_visitors(&self) -> bool {
        matches!(
            self,
            Role::SuperAdmin | Role::Admin | Role::Secretary | Role::Security
        )
    }

    /// Roles that may manage the society/building/wing hierarchy.
    pub fn can_manage_buildings(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }

    /// Roles with access to the system-monitoring view.
    pub fn can_view_monitoring(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Developer)
    }

    /// Roles with access to the settings panel.
    pub fn can_edit_settings(&self) -> bool {
        !matches!(self, Role::Resident | Role::Guest)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "admin" => Ok(Role::Admin),
            "secretary" => Ok(Role::Secretary),
            "security" => Ok(Role::Security),
            "developer" => Ok(Role::Developer),
            "resident" => Ok(Role::Resident),
            "guest" => Ok(Role::Guest),
            _ => Err("unknown role"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_round_trips() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
        }
    }

    #[test]
    fn capability_table() {
        assert!(Role::SuperAdmin.can_manage_users());
        assert!(Role::Secretary.can_manage_users());
        assert!(!Role::Security.can_manage_users());

        assert!(Role::Security.can_review_visitors());
        assert!(!Role::Security.can_create_visitors());

        assert!(Role::Developer.can_view_monitoring());
        assert!(!Role::Admin.can_view_monitoring());
        assert!(!Role::Guest.can_edit_settings());
    }
}
