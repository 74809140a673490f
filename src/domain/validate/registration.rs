use super::ValidationError;
use crate::domain::model::{provided, Registration, User};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 5;
const MIN_FULL_NAME_LEN: usize = 10;
const MIN_AGE: f64 = 10.0;
const GENDERS: &[&str] = &["male", "female"];

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Numeric value of `v` under loose coercion, as clients of this API expect an `age`
/// to be compared: `null`, `false`, blank strings and `[]` are 0, `true` is 1, numeric
/// strings (decimal, exponent, `0x`/`0o`/`0b`, `Infinity`) are parsed, and one-element
/// arrays coerce their element. `None` stands for "not a number".
pub fn coerce_number(v: &JsonValue) -> Option<f64> {
    match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::Null => Some(0.0),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        JsonValue::String(s) => parse_numeric_str(s),
        JsonValue::Array(items) => match items.as_slice() {
            [] | [JsonValue::Null] => Some(0.0),
            [item @ (JsonValue::Number(_) | JsonValue::String(_) | JsonValue::Array(_))] => {
                coerce_number(item)
            }
            _ => None,
        },
        JsonValue::Object(_) => None,
    }
}

fn parse_numeric_str(raw: &str) -> Option<f64> {
    let s = raw.trim();
    match s {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let lower = s.get(..2).map(str::to_ascii_lowercase);
        if lower.as_deref() == Some(prefix) {
            let digits = &s[2..];
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // Rust's float parser also takes "inf" and "nan"; those are not numbers here.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Checks a registration in rule order and, on success, returns the record to persist.
///
/// Optional fields and `age` are stored exactly as given, including an empty `fullName`
/// or `gender` and a string `age`. Body fields other than the six known ones are dropped.
pub fn validate_registration(reg: Registration) -> Result<User, ValidationError> {
    let username = match provided(&reg.username) {
        Some(u) if char_len(u) >= MIN_USERNAME_LEN => u.to_string(),
        _ => return Err(ValidationError::UsernameTooShort),
    };

    let password = match provided(&reg.password) {
        Some(p) if char_len(p) >= MIN_PASSWORD_LEN => p.to_string(),
        _ => return Err(ValidationError::PasswordTooShort),
    };

    if provided(&reg.full_name).is_some_and(|n| char_len(n) < MIN_FULL_NAME_LEN) {
        return Err(ValidationError::FullNameTooShort);
    }

    // A missing age is rejected. An age that does not coerce to a number is not
    // "less than 10" and passes.
    let age = match reg.age {
        Some(age) if coerce_number(&age).map_or(true, |a| a >= MIN_AGE) => age,
        _ => return Err(ValidationError::AgeTooLow),
    };

    let email = match provided(&reg.email) {
        Some(e) if e.contains('@') => e.to_string(),
        _ => return Err(ValidationError::InvalidEmail),
    };

    if let Some(gender) = provided(&reg.gender) {
        let gender = gender.to_lowercase();
        if !GENDERS.contains(&gender.as_str()) {
            return Err(ValidationError::InvalidGender);
        }
    }

    Ok(User {
        username,
        password,
        full_name: reg.full_name,
        age,
        email,
        gender: reg.gender,
        extra: BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Registration {
        Registration {
            username: Some("alice".to_string()),
            password: Some("secret1".to_string()),
            full_name: Some("Alice Liddell".to_string()),
            age: Some(json!(30)),
            email: Some("alice@example.com".to_string()),
            gender: Some("Female".to_string()),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        let user = validate_registration(valid()).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.age, json!(30));
        assert_eq!(user.gender.as_deref(), Some("Female"));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let reg = Registration {
            full_name: None,
            gender: None,
            ..valid()
        };
        let user = validate_registration(reg).unwrap();
        assert!(user.full_name.is_none());
        assert!(user.gender.is_none());
    }

    #[test]
    fn test_empty_optional_fields_are_kept_as_given() {
        let reg = Registration {
            full_name: Some(String::new()),
            gender: Some(String::new()),
            ..valid()
        };
        let user = validate_registration(reg).unwrap();
        assert_eq!(user.full_name.as_deref(), Some(""));
        assert_eq!(user.gender.as_deref(), Some(""));
    }

    #[test]
    fn test_each_rule_reports_its_message() {
        let cases = vec![
            (
                Registration {
                    username: None,
                    ..valid()
                },
                ValidationError::UsernameTooShort,
            ),
            (
                Registration {
                    username: Some("al".into()),
                    ..valid()
                },
                ValidationError::UsernameTooShort,
            ),
            (
                Registration {
                    password: Some("1234".into()),
                    ..valid()
                },
                ValidationError::PasswordTooShort,
            ),
            (
                Registration {
                    full_name: Some("Short".into()),
                    ..valid()
                },
                ValidationError::FullNameTooShort,
            ),
            (
                Registration {
                    age: None,
                    ..valid()
                },
                ValidationError::AgeTooLow,
            ),
            (
                Registration {
                    age: Some(json!(9)),
                    ..valid()
                },
                ValidationError::AgeTooLow,
            ),
            (
                Registration {
                    email: Some("alice.example.com".into()),
                    ..valid()
                },
                ValidationError::InvalidEmail,
            ),
            (
                Registration {
                    email: None,
                    ..valid()
                },
                ValidationError::InvalidEmail,
            ),
            (
                Registration {
                    gender: Some("other".into()),
                    ..valid()
                },
                ValidationError::InvalidGender,
            ),
        ];

        for (reg, expected) in cases {
            assert_eq!(validate_registration(reg).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let reg = Registration {
            username: Some("ab".into()),
            password: Some("x".into()),
            age: None,
            email: None,
            ..valid()
        };
        assert_eq!(
            validate_registration(reg).unwrap_err(),
            ValidationError::UsernameTooShort
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let reg = Registration {
            username: Some("abc".into()),
            password: Some("12345".into()),
            full_name: Some("0123456789".into()),
            age: Some(json!(10)),
            email: Some("@".into()),
            gender: Some("MALE".into()),
        };
        assert!(validate_registration(reg).is_ok());
    }

    #[test]
    fn test_fractional_age_below_minimum_is_rejected() {
        let reg = Registration {
            age: Some(json!(9.5)),
            ..valid()
        };
        assert_eq!(validate_registration(reg).unwrap_err(), ValidationError::AgeTooLow);
    }

    #[test]
    fn test_string_age_is_compared_numerically_and_kept() {
        let young = Registration {
            age: Some(json!("5")),
            ..valid()
        };
        assert_eq!(validate_registration(young).unwrap_err(), ValidationError::AgeTooLow);

        let adult = Registration {
            age: Some(json!(" 25 ")),
            ..valid()
        };
        assert_eq!(validate_registration(adult).unwrap().age, json!(" 25 "));
    }

    #[test]
    fn test_age_that_is_not_a_number_passes() {
        for age in [json!("abc"), json!({}), json!([1, 2]), json!("inf")] {
            let reg = Registration {
                age: Some(age.clone()),
                ..valid()
            };
            assert_eq!(validate_registration(reg).unwrap().age, age);
        }
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(12)), Some(12.0));
        assert_eq!(coerce_number(&json!(null)), Some(0.0));
        assert_eq!(coerce_number(&json!(false)), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!("1e2")), Some(100.0));
        assert_eq!(coerce_number(&json!("0x1A")), Some(26.0));
        assert_eq!(coerce_number(&json!("-Infinity")), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number(&json!([])), Some(0.0));
        assert_eq!(coerce_number(&json!(["7"])), Some(7.0));
        assert_eq!(coerce_number(&json!("12abc")), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!([true])), None);
    }

    #[test]
    fn test_username_length_counts_characters() {
        let reg = Registration {
            username: Some("éé".into()),
            ..valid()
        };
        assert_eq!(
            validate_registration(reg).unwrap_err(),
            ValidationError::UsernameTooShort
        );
    }
}
