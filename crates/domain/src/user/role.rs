use serde::{Deserialize, Serialize};

/// Role granted to a user. Variants are declared in id order so that
/// `Ord` ranks the most privileged role first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Supervisor,
    Analyst,
    Receptionist,
}

impl Role {
    /// Stable numeric id, reported as `id_role` on issued trials.
    pub fn id(&self) -> i32 {
        match self {
            Self::Admin => 1,
            Self::Supervisor => 2,
            Self::Analyst => 3,
            Self::Receptionist => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Supervisor => "Supervisor",
            Self::Analyst => "Analyst",
            Self::Receptionist => "Receptionist",
        }
    }

    /// Sort and deduplicate a role list.
    pub fn normalize(mut roles: Vec<Role>) -> Vec<Role> {
        roles.sort();
        roles.dedup();
        roles
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids() {
        assert_eq!(Role::Admin.id(), 1);
        assert_eq!(Role::Supervisor.id(), 2);
        assert_eq!(Role::Analyst.id(), 3);
        assert_eq!(Role::Receptionist.id(), 4);
    }

    #[test]
    fn test_serde_uses_names() {
        let value = serde_json::to_value(vec![Role::Admin, Role::Receptionist]).unwrap();
        assert_eq!(value, serde_json::json!(["Admin", "Receptionist"]));
        assert!(serde_json::from_value::<Role>(serde_json::json!("admin")).is_err());
    }

    #[test]
    fn test_normalize() {
        let roles = Role::normalize(vec![Role::Analyst, Role::Admin, Role::Analyst]);
        assert_eq!(roles, vec![Role::Admin, Role::Analyst]);
    }
}
