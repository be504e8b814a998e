//! Stateless field predicates. Each check either passes or returns the
//! human-readable reason shown beside the field.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Postcode is required")]
    PostcodeRequired,
    #[error("We currently only serve {prefix} postcodes")]
    OutsideRegion { prefix: String },
    #[error("Invalid UK Postcode format")]
    PostcodeFormat,
    #[error("Please enter a valid UK phone number")]
    PhoneFormat,
    #[error("Invalid email address")]
    EmailFormat,
    /// Wording used by the support page forms.
    #[error("Please enter a valid email address")]
    ContactEmailFormat,
    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },
    #[error("Message must be at least {min} characters long")]
    MessageTooShort { min: usize },
    #[error("{0}")]
    Unselected(&'static str),
}

fn postcode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^(GIR ?0AA|[A-PR-UWYZ]([0-9]{1,2}|([A-HK-Y][0-9]([0-9ABEHMNPRV-Y])?)|[0-9][A-HJKPS-UW]) ?[0-9][ABD-HJLNP-UW-Z]{2})$",
        )
        .expect("postcode pattern compiles")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(((\+44\s?\d{4}|\(?0\d{4}\)?)\s?\d{3}\s?\d{3})|((\+44\s?\d{3}|\(?0\d{3}\)?)\s?\d{3}\s?\d{4})|((\+44\s?\d{2}|\(?0\d{2}\)?)\s?\d{4}\s?\d{4}))(\s?#(\d{4}|\d{3}))?$",
        )
        .expect("phone pattern compiles")
    })
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

/// True when `raw` has the shape of a UK postcode, ignoring region.
pub fn is_uk_postcode(raw: &str) -> bool {
    postcode_pattern().is_match(raw.trim())
}

/// Checks a postcode is present, inside the serviced region, and well formed.
///
/// The region is checked before the national shape so every input outside
/// the serviced area reports the region restriction.
pub fn validate_postcode(raw: &str, region_prefix: &str) -> Result<(), ValidationError> {
    let postcode = raw.trim();
    if postcode.is_empty() {
        return Err(ValidationError::PostcodeRequired);
    }

    let in_region = postcode
        .get(..region_prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(region_prefix));
    if !in_region {
        return Err(ValidationError::OutsideRegion {
            prefix: region_prefix.to_ascii_uppercase(),
        });
    }

    if !is_uk_postcode(postcode) {
        return Err(ValidationError::PostcodeFormat);
    }

    Ok(())
}

pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    if phone_pattern().is_match(raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::PhoneFormat)
    }
}

pub fn validate_email(raw: &str) -> Result<(), ValidationError> {
    if email_pattern().is_match(raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::EmailFormat)
    }
}

/// Minimum length over the trimmed value, counted in characters.
pub fn validate_min_length(
    raw: &str,
    label: &'static str,
    min: usize,
) -> Result<(), ValidationError> {
    if raw.trim().chars().count() >= min {
        Ok(())
    } else {
        Err(ValidationError::TooShort { label, min })
    }
}

/// Requires `raw` to be one of the offered `options`.
pub fn validate_choice<'a, I>(
    raw: &str,
    options: I,
    message: &'static str,
) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let value = raw.trim();
    if !value.is_empty() && options.into_iter().any(|option| option == value) {
        Ok(())
    } else {
        Err(ValidationError::Unselected(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_serviced_postcodes_with_and_without_space() {
        for postcode in ["HP11 2DA", "hp13 1ab", "HP131AB", " HP10 9QR "] {
            assert_eq!(validate_postcode(postcode, "HP"), Ok(()), "{postcode}");
        }
    }

    #[test]
    fn off_region_postcodes_report_region_restriction() {
        for postcode in ["SW1A 1AA", "SL7 1AA", "M1 1AE", "XYZ", "12345"] {
            assert_eq!(
                validate_postcode(postcode, "HP"),
                Err(ValidationError::OutsideRegion {
                    prefix: "HP".to_string()
                }),
                "{postcode}"
            );
        }
    }

    #[test]
    fn malformed_regional_postcode_reports_format() {
        assert_eq!(
            validate_postcode("HP1", "HP"),
            Err(ValidationError::PostcodeFormat)
        );
        assert_eq!(
            validate_postcode("HPXX 2DA", "HP"),
            Err(ValidationError::PostcodeFormat)
        );
    }

    #[test]
    fn empty_postcode_is_required() {
        assert_eq!(
            validate_postcode("   ", "HP"),
            Err(ValidationError::PostcodeRequired)
        );
        assert_eq!(ValidationError::PostcodeRequired.to_string(), "Postcode is required");
    }

    #[test]
    fn region_message_names_the_prefix() {
        let err = validate_postcode("SW1A 1AA", "hp").expect_err("outside region");
        assert_eq!(err.to_string(), "We currently only serve HP postcodes");
    }

    #[test]
    fn phone_accepts_common_uk_shapes() {
        for phone in [
            "07700900000",
            "07700 900000",
            "07700 900 000",
            "+44 7700 900000",
            "(01494) 123456",
            "01494 123456",
            "020 7946 0958",
            "020 7946 0958 #1234",
        ] {
            assert_eq!(validate_phone(phone), Ok(()), "{phone}");
        }
    }

    #[test]
    fn phone_rejects_short_or_foreign_numbers() {
        for phone in ["", "12345", "0770090000", "+1 415 555 0100", "phone me"] {
            assert_eq!(validate_phone(phone), Err(ValidationError::PhoneFormat), "{phone}");
        }
    }

    #[test]
    fn email_shape() {
        assert_eq!(validate_email("jane@example.com"), Ok(()));
        assert_eq!(validate_email("j.doe+quotes@mail.example.co.uk"), Ok(()));
        for email in ["not-an-email", "jane@", "@example.com", "jane@example", ""] {
            assert_eq!(validate_email(email), Err(ValidationError::EmailFormat), "{email}");
        }
    }

    #[test]
    fn min_length_counts_trimmed_characters() {
        assert_eq!(validate_min_length("Jo", "Name", 2), Ok(()));
        assert_eq!(
            validate_min_length(" J ", "Name", 2),
            Err(ValidationError::TooShort {
                label: "Name",
                min: 2
            })
        );
        assert_eq!(
            ValidationError::TooShort {
                label: "Name",
                min: 2
            }
            .to_string(),
            "Name must be at least 2 characters"
        );
    }

    #[test]
    fn choice_must_be_offered() {
        let options = ["Carpet Fitting", "Floor Tiling"];
        assert_eq!(
            validate_choice("Floor Tiling", options, "Please select a service type"),
            Ok(())
        );
        assert_eq!(
            validate_choice("", options, "Please select a service type"),
            Err(ValidationError::Unselected("Please select a service type"))
        );
        assert_eq!(
            validate_choice("Roof Repair", options, "Please select a service type"),
            Err(ValidationError::Unselected("Please select a service type"))
        );
    }
}
