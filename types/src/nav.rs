//! The sidebar menu and its per-role visibility.

use crate::role::Role;

/// A single sidebar entry. Static configuration, never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
}

const STAFF: &[Role] = &[
    Role::SuperAdmin,
    Role::Admin,
    Role::Secretary,
    Role::Security,
    Role::Developer,
];

const OFFICE: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Secretary];

const GATE: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Secretary, Role::Security];

/// Sidebar entries in display order.
pub const MENU: &[MenuItem] = &[
    MenuItem {
        label: "Dashboard",
        path: "/",
        icon: "layout-dashboard",
        roles: STAFF,
    },
    MenuItem {
        label: "User Management",
        path: "/users",
        icon: "users",
        roles: OFFICE,
    },
    MenuItem {
        label: "Visitor Management",
        path: "/visitors",
        icon: "user-check",
        roles: GATE,
    },
    MenuItem {
        label: "Buildings",
        path: "/buildings",
        icon: "building",
        roles: &[Role::SuperAdmin, Role::Admin],
    },
    MenuItem {
        label: "Payments",
        path: "/payments",
        icon: "credit-card",
        roles: OFFICE,
    },
    MenuItem {
        label: "Communication",
        path: "/communication",
        icon: "message-square",
        roles: OFFICE,
    },
    MenuItem {
        label: "Building Maps",
        path: "/maps",
        icon: "map-pin",
        roles: GATE,
    },
    MenuItem {
        label: "System Monitoring",
        path: "/monitoring",
        icon: "code",
        roles: &[Role::SuperAdmin, Role::Developer],
    },
    MenuItem {
        label: "Settings",
        path: "/settings",
        icon: "settings",
        roles: STAFF,
    },
    MenuItem {
        label: "Support",
        path: "/support",
        icon: "help-circle",
        roles: STAFF,
    },
];

/// Sidebar entries visible to `role`, in declaration order.
pub fn visible_menu(role: Role) -> Vec<&'static MenuItem> {
    MENU.iter().filter(|item| item.roles.contains(&role)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_matches_role_sets() {
        // An item is visible to a role exactly when the role is listed on it.
        for role in Role::ALL {
            let visible = visible_menu(role);
            for item in MENU {
                assert_eq!(
                    visible.iter().any(|v| v.path == item.path),
                    item.roles.contains(&role),
                    "item {} for role {role}",
                    item.label,
                );
            }
        }
    }

    #[test]
    fn declaration_order_is_preserved() {
        let visible = visible_menu(Role::Security);
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| MENU.iter().position(|m| m.path == v.path).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn restricted_roles_see_nothing() {
        assert!(visible_menu(Role::Resident).is_empty());
        assert!(visible_menu(Role::Guest).is_empty());
    }

    #[test]
    fn developer_menu() {
        let labels: Vec<&str> = visible_menu(Role::Developer)
            .iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(
            labels,
            ["Dashboard", "System Monitoring", "Settings", "Support"]
        );
    }
}
