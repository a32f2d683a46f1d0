//! Well-known role name constants.
//!
//! Stored verbatim in `users.role`; see the users migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// All roles an administrator may assign.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Check whether `role` is one of the known role names.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role("admin"));
        assert!(is_valid_role("user"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role("Admin"));
    }
}
