// Helper functions for message building and safe logging

/// Indefinite article for a field name: "an" before a vowel, otherwise "a".
pub fn article(field_name: &str) -> &'static str {
    match field_name.chars().next() {
        Some(c) if "aeiou".contains(c.to_ascii_lowercase()) => "an",
        _ => "a",
    }
}

/// Uppercases the first character only, leaving the rest untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Masks email addresses for safe logging
///
/// # Example
/// ```
/// use govuk_form_rules::common::helpers::safe_email_log;
/// assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    let parts: Vec<&str> = email.split('@').collect();
    match parts.as_slice() {
        [local, domain] if email.len() > 3 => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Masks identifiers such as National Insurance numbers, keeping the last two characters.
pub fn safe_identifier_log(value: &str) -> String {
    let count = value.chars().count();
    if count > 4 {
        let tail: String = value.chars().skip(count - 2).collect();
        format!("***{}", tail)
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article() {
        assert_eq!(article("email address"), "an");
        assert_eq!(article("Issue date"), "an");
        assert_eq!(article("date of birth"), "a");
        assert_eq!(article(""), "a");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("date of birth"), "Date of birth");
        assert_eq!(capitalize_first("Date"), "Date");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_email_log("a@@b.com"), "***@***.***");
        assert_eq!(safe_email_log("a@b"), "***@***.***");
    }

    #[test]
    fn test_safe_identifier_log() {
        assert_eq!(safe_identifier_log("AB123456C"), "***6C");
        assert_eq!(safe_identifier_log("AB"), "***");
    }
}
