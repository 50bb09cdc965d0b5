//! Input normalisation and validation helpers.

/// Trim and lowercase an email address.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trim and lowercase a client UUID. ServiceM8 issues them in lowercase;
/// hand-entered values may not be.
#[must_use]
pub fn normalize_client_uuid(client_uuid: &str) -> String {
    client_uuid.trim().to_lowercase()
}

/// Structural email check: one `@`, a non-empty local part, and a dotted
/// domain with no empty labels. No whitespace anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// ServiceM8 record identifiers are standard hyphenated UUIDs.
#[must_use]
pub fn is_valid_uuid(value: &str) -> bool {
    let value = value.trim();
    value.len() == 36 && uuid::Uuid::parse_str(value).is_ok()
}

/// A client assignment counts only when it is non-blank and not the
/// literal placeholder `"none"`.
#[must_use]
pub fn is_assigned_client(value: Option<&str>) -> bool {
    value
        .map(str::trim)
        .is_some_and(|v| !v.is_empty() && v != "none")
}

/// Mask a secret for display, keeping only its first four characters.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "****".to_string();
    }
    let head: String = secret.chars().take(4).collect();
    format!("{head}****")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("admin@example.com", true)]
    #[case("  Admin@Example.com ", true)]
    #[case("first.last+tag@mail.example.co.uk", true)]
    #[case("no-at-sign.example.com", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@localhost", false)]
    #[case("user@example..com", false)]
    #[case("us er@example.com", false)]
    #[case("a@b@example.com", false)]
    fn email_validation(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(input), expected, "input: {input:?}");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("   "), false)]
    #[case(Some("none"), false)]
    #[case(Some("8a1b2c3d-0000-4000-8000-000000000001"), true)]
    #[case(Some("legacy-client-id"), true)]
    fn client_assignment(#[case] input: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_assigned_client(input), expected);
    }

    #[test]
    fn uuid_validation() {
        assert!(is_valid_uuid("8a1b2c3d-0000-4000-8000-000000000001"));
        assert!(!is_valid_uuid("8a1b2c3d00004000800000000000000001"));
        assert!(!is_valid_uuid("not-a-uuid"));
    }

    #[test]
    fn mask_secret_hides_tail() {
        assert_eq!(mask_secret("abcdef0123456789"), "abcd****");
        assert_eq!(mask_secret("short"), "****");
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ops@Example.COM\n"), "ops@example.com");
    }
}
