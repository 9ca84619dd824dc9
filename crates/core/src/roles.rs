//! Well-known role name constants.
//!
//! Tokens carry these names verbatim in their `roles` claim.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Whether a principal holding `granted` satisfies a `required` role.
///
/// `admin` implies `user`; nothing implies `admin`.
pub fn satisfies<S: AsRef<str>>(granted: &[S], required: &str) -> bool {
    granted.iter().any(|role| {
        let role = role.as_ref();
        role == required || (role == ROLE_ADMIN && required == ROLE_USER)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_implies_user() {
        assert!(satisfies(&["admin"], ROLE_USER));
        assert!(satisfies(&["admin"], ROLE_ADMIN));
    }

    #[test]
    fn user_is_not_admin() {
        assert!(satisfies(&["user"], ROLE_USER));
        assert!(!satisfies(&["user"], ROLE_ADMIN));
    }

    #[test]
    fn empty_and_unknown_roles_satisfy_nothing() {
        let none: [&str; 0] = [];
        assert!(!satisfies(&none, ROLE_USER));
        assert!(!satisfies(&["guest".to_string()], ROLE_USER));
    }
}
