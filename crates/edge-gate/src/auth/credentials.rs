//! Login credential policy: a fixed allow-list of demo accounts.

use crate::session::SessionUser;

const DEMO_PASSWORD: &str = "Test12345!";

const BUILTIN_ACCOUNTS: [(&str, &str); 2] = [
    ("user@test.de", DEMO_PASSWORD),
    ("admin@hotel-dashboard.de", DEMO_PASSWORD),
];

/// Lower-case and trim an email exactly once, at login time.
pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

#[derive(Debug, Clone)]
pub struct AllowList {
    accounts: Vec<(String, String)>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(
            BUILTIN_ACCOUNTS
                .iter()
                .map(|(email, password)| (email.to_string(), password.to_string())),
        )
    }
}

impl AllowList {
    pub fn new(accounts: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|(email, password)| (normalize_email(&email), password))
                .collect(),
        }
    }

    /// Match an (email, password) pair against the list. The role is resolved
    /// here and travels with the session from then on.
    pub fn verify(&self, email: &str, password: &str) -> Option<SessionUser> {
        let email = normalize_email(email);
        let password = password.trim();

        if email.is_empty() || password.is_empty() {
            return None;
        }

        self.accounts
            .iter()
            .any(|(allowed_email, allowed_password)| {
                *allowed_email == email && allowed_password == password
            })
            .then(|| SessionUser::new(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_builtin_accounts() {
        let allow_list = AllowList::default();

        let admin = allow_list
            .verify("admin@hotel-dashboard.de", "Test12345!")
            .expect("admin should be accepted");
        assert_eq!(admin.role, Role::Admin);

        let user = allow_list
            .verify("user@test.de", "Test12345!")
            .expect("user should be accepted");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "user@test.de");
    }

    #[test]
    fn test_normalizes_input() {
        let allow_list = AllowList::default();
        let user = allow_list.verify("  USER@Test.DE ", " Test12345! ").unwrap();
        assert_eq!(user.email, "user@test.de");
    }

    #[test]
    fn test_rejects_everything_else() {
        let allow_list = AllowList::default();
        assert!(allow_list.verify("user@test.de", "wrong-password").is_none());
        assert!(allow_list.verify("user@test.de", "test12345!").is_none());
        // long enough password is not sufficient on its own
        assert!(allow_list.verify("someone@test.de", "Test12345!").is_none());
        assert!(allow_list.verify("", "").is_none());
    }
}
