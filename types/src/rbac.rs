//! Role-based visibility for managed records.
//!
//! [`visible_records`] is applied before any search or status sub-filter so
//! that a search can never surface an out-of-scope record. All filters are
//! pure and stable: the output is a subset of the input in input order, and
//! the source collection is never mutated.

use crate::identity::{AccountStatus, ScopeRef};
use crate::role::Role;
use crate::user::ManagedUser;
use crate::visitor::{Visitor, VisitorStatus};

/// Records that carry a society/building scope.
pub trait Scoped {
    fn society(&self) -> Option<&str>;
    fn building(&self) -> Option<&str>;

    /// Whether a secretary's society-wide view includes this record.
    /// Directory users qualify only as residents; visitors always do.
    fn society_audience(&self) -> bool {
        true
    }
}

/// Records searchable by the free-text sub-filter.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// The subset of `records` visible to `role` under `scope`.
///
/// A scope-restricted role whose identity is missing the relevant scope
/// field sees an empty list, never everything.
pub fn visible_records<T: Scoped>(role: Role, scope: ScopeRef<'_>, records: Vec<T>) -> Vec<T> {
    match role {
        Role::SuperAdmin | Role::Admin => records,
        Role::Secretary => match scope.society {
            Some(society) => records
                .into_iter()
                .filter(|r| r.society() == Some(society) && r.society_audience())
                .collect(),
            None => Vec::new(),
        },
        Role::Security => match (scope.society, scope.building) {
            (Some(society), Some(building)) => records
                .into_iter()
                .filter(|r| r.society() == Some(society) && r.building() == Some(building))
                .collect(),
            _ => Vec::new(),
        },
        Role::Developer | Role::Resident | Role::Guest => Vec::new(),
    }
}

/// Case-insensitive substring match over each record's search fields.
/// An empty or whitespace-only term matches everything.
pub fn filter_search<T: Searchable>(records: Vec<T>, term: &str) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| {
            r.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Exact-match role filter for the users screen.
pub fn filter_role(records: Vec<ManagedUser>, role: Option<Role>) -> Vec<ManagedUser> {
    match role {
        Some(role) => records.into_iter().filter(|u| u.role == role).collect(),
        None => records,
    }
}

/// Exact-match account-status filter for the users screen.
pub fn filter_status(
    records: Vec<ManagedUser>,
    status: Option<AccountStatus>,
) -> Vec<ManagedUser> {
    match status {
        Some(status) => records.into_iter().filter(|u| u.status == status).collect(),
        None => records,
    }
}

/// Exact-match lifecycle filter for the visitors screen.
pub fn filter_visitor_status(
    records: Vec<Visitor>,
    status: Option<VisitorStatus>,
) -> Vec<Visitor> {
    match status {
        Some(status) => records.into_iter().filter(|v| v.status == status).collect(),
        None => records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(name: &str, role: Role, society: Option<&str>, building: Option<&str>) -> ManagedUser {
        ManagedUser {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            name: name.into(),
            phone: Some("+1-234-567-8900".into()),
            role,
            society: society.map(Into::into),
            building: building.map(Into::into),
            floor: None,
            flat: None,
            status: AccountStatus::Active,
            avatar: None,
            created_at: None,
        }
    }

    fn visitor(name: &str, society: Option<&str>, building: Option<&str>) -> Visitor {
        Visitor {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: "+1-234-567-8901".into(),
            email: None,
            purpose: "Family Visit".into(),
            host_name: "John Doe".into(),
            host_flat: "502".into(),
            society: society.map(Into::into),
            building: building.map(Into::into),
            status: VisitorStatus::Pending,
            check_in_time: None,
            check_out_time: None,
            vehicle_number: None,
            qr_code: None,
        }
    }

    fn sample_users() -> Vec<ManagedUser> {
        vec![
            user("John Doe", Role::Resident, Some("Sunset Gardens"), Some("Tower A")),
            user("Jane Smith", Role::Resident, Some("Sunset Gardens"), Some("Tower B")),
            user("Mike Wilson", Role::Security, Some("Sunset Gardens"), Some("Tower A")),
            user("Bob Brown", Role::Resident, Some("Blue Hills"), Some("Tower C")),
        ]
    }

    fn scope<'a>(society: Option<&'a str>, building: Option<&'a str>) -> ScopeRef<'a> {
        ScopeRef { society, building }
    }

    #[test]
    fn admins_see_everything_unchanged() {
        let users = sample_users();
        for role in [Role::SuperAdmin, Role::Admin] {
            let visible = visible_records(role, scope(None, None), users.clone());
            assert_eq!(visible, users);
        }
    }

    #[test]
    fn secretary_sees_residents_of_own_society_only() {
        let visible = visible_records(
            Role::Secretary,
            scope(Some("Sunset Gardens"), None),
            sample_users(),
        );
        let names: Vec<&str> = visible.iter().map(|u| u.name.as_str()).collect();
        // Mike Wilson is in the society but is not a resident.
        assert_eq!(names, ["John Doe", "Jane Smith"]);
        assert!(visible.iter().all(|u| u.society.as_deref() == Some("Sunset Gardens")));
    }

    #[test]
    fn security_needs_both_scope_fields_to_match() {
        let visible = visible_records(
            Role::Security,
            scope(Some("Sunset Gardens"), Some("Tower A")),
            sample_users(),
        );
        let names: Vec<&str> = visible.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["John Doe", "Mike Wilson"]);
    }

    #[test]
    fn missing_scope_yields_empty_not_all() {
        assert!(visible_records(Role::Secretary, scope(None, None), sample_users()).is_empty());
        assert!(
            visible_records(
                Role::Security,
                scope(Some("Sunset Gardens"), None),
                sample_users()
            )
            .is_empty()
        );
    }

    #[test]
    fn unprivileged_roles_have_no_list_access() {
        for role in [Role::Developer, Role::Resident, Role::Guest] {
            assert!(
                visible_records(role, scope(Some("Sunset Gardens"), Some("Tower A")), sample_users())
                    .is_empty()
            );
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let s = scope(Some("Sunset Gardens"), Some("Tower A"));
        let once = visible_records(Role::Security, s, sample_users());
        let twice = visible_records(Role::Security, s, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn visitors_always_count_for_the_society_audience() {
        let visitors = vec![
            visitor("Alex Johnson", Some("Sunset Gardens"), Some("Tower A")),
            visitor("Maria Garcia", Some("Sunset Gardens"), Some("Tower B")),
            visitor("David Wilson", Some("Blue Hills"), Some("Tower C")),
        ];
        let visible = visible_records(
            Role::Secretary,
            scope(Some("Sunset Gardens"), None),
            visitors,
        );
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_over_name_email_phone() {
        let users = sample_users();
        assert_eq!(filter_search(users.clone(), "JANE").len(), 1);
        assert_eq!(filter_search(users.clone(), "example.com").len(), 4);
        assert_eq!(filter_search(users.clone(), "8900").len(), 4);
        assert!(filter_search(users.clone(), "zzz").is_empty());
        // Empty and whitespace-only terms match everything.
        assert_eq!(filter_search(users.clone(), "").len(), 4);
        assert_eq!(filter_search(users, "   ").len(), 4);
    }

    #[test]
    fn search_after_rbac_never_widens_the_set() {
        let s = scope(Some("Sunset Gardens"), None);
        let scoped = visible_records(Role::Secretary, s, sample_users());
        for term in ["", "bob", "brown", "blue", "e"] {
            let searched = filter_search(scoped.clone(), term);
            assert!(searched.iter().all(|u| scoped.contains(u)), "term {term:?}");
        }
    }

    #[test]
    fn exact_match_sub_filters() {
        let users = sample_users();
        assert_eq!(filter_role(users.clone(), Some(Role::Security)).len(), 1);
        assert_eq!(filter_role(users.clone(), None).len(), 4);
        assert_eq!(filter_status(users, Some(AccountStatus::Inactive)).len(), 0);

        let visitors = vec![visitor("Alex Johnson", None, None)];
        assert_eq!(
            filter_visitor_status(visitors.clone(), Some(VisitorStatus::Pending)).len(),
            1
        );
        assert!(
            filter_visitor_status(visitors, Some(VisitorStatus::CheckedIn)).is_empty()
        );
    }
}
