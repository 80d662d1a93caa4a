pub const USERS_EMAIL_INDEX: &str = r#"
    DEFINE INDEX IF NOT EXISTS users_email ON TABLE users COLUMNS email UNIQUE;
"#;

pub const USERS_REFRESH_TOKEN_INDEX: &str = r#"
    DEFINE INDEX IF NOT EXISTS users_refresh_token ON TABLE users COLUMNS refresh_token.token;
"#;

pub const USERS_REFRESH_TOKEN_EXPIRY_INDEX: &str = r#"
    DEFINE INDEX IF NOT EXISTS users_refresh_token_expiry ON TABLE users COLUMNS refresh_token.expires_at;
"#;

pub const SCHEMAS_SLUG_INDEX: &str = r#"
    DEFINE INDEX IF NOT EXISTS schemas_slug ON TABLE schemas COLUMNS slug UNIQUE;
"#;

pub fn all() -> Vec<&'static str> {
    vec![
        USERS_EMAIL_INDEX,
        USERS_REFRESH_TOKEN_INDEX,
        USERS_REFRESH_TOKEN_EXPIRY_INDEX,
        SCHEMAS_SLUG_INDEX,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_index_definition() {
        assert_eq!(all().len(), 4);
    }

    #[test]
    fn only_email_and_slug_are_unique() {
        assert!(USERS_EMAIL_INDEX.contains("UNIQUE"));
        assert!(SCHEMAS_SLUG_INDEX.contains("UNIQUE"));
        assert!(!USERS_REFRESH_TOKEN_INDEX.contains("UNIQUE"));
        assert!(!USERS_REFRESH_TOKEN_EXPIRY_INDEX.contains("UNIQUE"));
    }
}
