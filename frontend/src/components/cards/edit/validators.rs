//! Field validators for the card edit form.
//!
//! A [`Rule`] checks one string value and yields at most one [`FieldError`].
//! Rules other than [`Rule::Required`] accept the empty string: an optional
//! field that was left blank is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

// Optional scheme, a dotted domain, then an optional path.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://)?[\da-z.-]+\.[a-z.]{2,6}[/\w .-]*/?$")
        .expect("url pattern is valid")
});

const EMAIL_MAX_TOTAL: usize = 254;
const EMAIL_MAX_LOCAL: usize = 64;

/// A validation failure. The `Display` text is what the form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Este campo es obligatorio.")]
    Required,
    #[error("Máximo {max} caracteres permitidos.")]
    MaxLength { max: usize },
    #[error("Ingrese un email válido.")]
    Email,
    #[error("Ingrese una URL válida.")]
    Url,
    #[error("Ingrese un número entero.")]
    NotAnInteger,
    #[error("El valor mínimo es {min}.")]
    Min { min: i64 },
    #[error("El valor máximo es {max}.")]
    Max { max: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Upper bound on the number of characters.
    MaxLength(usize),
    Email,
    Url,
    /// Whole number within `min..=max`.
    Range { min: i64, max: i64 },
}

impl Rule {
    pub fn check(&self, value: &str) -> Option<FieldError> {
        match *self {
            Rule::Required => value.is_empty().then_some(FieldError::Required),
            Rule::MaxLength(max) => {
                (value.chars().count() > max).then_some(FieldError::MaxLength { max })
            }
            Rule::Email => (!value.is_empty() && !is_email(value)).then_some(FieldError::Email),
            Rule::Url => {
                (!value.is_empty() && !URL_RE.is_match(value)).then_some(FieldError::Url)
            }
            Rule::Range { min, max } => {
                if value.trim().is_empty() {
                    return None;
                }
                match value.trim().parse::<i64>() {
                    Err(_) => Some(FieldError::NotAnInteger),
                    Ok(n) if n < min => Some(FieldError::Min { min }),
                    Ok(n) if n > max => Some(FieldError::Max { max }),
                    Ok(_) => None,
                }
            }
        }
    }
}

fn is_email(value: &str) -> bool {
    let local_len = value.split('@').next().map_or(0, str::len);
    value.len() <= EMAIL_MAX_TOTAL && local_len <= EMAIL_MAX_LOCAL && EMAIL_RE.is_match(value)
}

/// Runs every rule and collects all failures, in rule order.
pub fn validate(value: &str, rules: &[Rule]) -> Vec<FieldError> {
    rules.iter().filter_map(|rule| rule.check(value)).collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn required_rejects_only_empty() {
        assert_eq!(Rule::Required.check(""), Some(FieldError::Required));
        assert_eq!(Rule::Required.check("Ana"), None);
    }

    #[test]
    fn max_length_counts_characters() {
        assert_eq!(Rule::MaxLength(3).check("ñañ"), None);
        assert_eq!(
            Rule::MaxLength(3).check("ñaña"),
            Some(FieldError::MaxLength { max: 3 })
        );
    }

    #[test]
    fn email_shape() {
        assert_eq!(Rule::Email.check(""), None);
        assert_eq!(Rule::Email.check("ana@example.com"), None);
        assert_eq!(Rule::Email.check("ana.perez+cards@mail.example.co"), None);
        assert_eq!(Rule::Email.check("ana@"), Some(FieldError::Email));
        assert_eq!(Rule::Email.check("ana example.com"), Some(FieldError::Email));
        assert_eq!(Rule::Email.check("@example.com"), Some(FieldError::Email));
    }

    #[test]
    fn url_accepts_bare_domains_and_full_urls() {
        for ok in [
            "ana.dev",
            "www.ana.dev",
            "https://linkedin.com/in/ana",
            "http://github.com/ana/",
            "https://YouTube.com/Ana",
        ] {
            assert_eq!(Rule::Url.check(ok), None, "{} should be accepted", ok);
        }
    }

    #[test]
    fn url_rejects_strings_without_a_dotted_domain() {
        for bad in ["linkedin", "https://localhost", "not a url"] {
            assert_eq!(Rule::Url.check(bad), Some(FieldError::Url), "{}", bad);
        }
    }

    #[test]
    fn range_is_inclusive() {
        let rule = Rule::Range { min: 0, max: 50 };
        assert_eq!(rule.check("0"), None);
        assert_eq!(rule.check("50"), None);
        assert_eq!(rule.check(""), None);
        assert_matches!(rule.check("51"), Some(FieldError::Max { max: 50 }));
        assert_matches!(rule.check("-1"), Some(FieldError::Min { min: 0 }));
        assert_matches!(rule.check("3.5"), Some(FieldError::NotAnInteger));
    }

    #[test]
    fn multiple_failures_are_reported_together() {
        let long_bad_email = format!("{}@", "a".repeat(300));
        let errors = validate(&long_bad_email, &[Rule::Email, Rule::MaxLength(255)]);
        assert_eq!(
            errors,
            vec![FieldError::Email, FieldError::MaxLength { max: 255 }]
        );
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            FieldError::MaxLength { max: 50 }.to_string(),
            "Máximo 50 caracteres permitidos."
        );
        assert_eq!(FieldError::Min { min: 0 }.to_string(), "El valor mínimo es 0.");
    }
}
