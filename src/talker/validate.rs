use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::dto::{SearchQuery, TalkerPayload};
use crate::error::ApiError;
use crate::store::Talk;

lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap();
}

/// A talker body that passed every check, with fields narrowed to their
/// real types. The id is assigned later by the handler.
#[derive(Debug, PartialEq)]
pub struct NewTalker {
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

/// Filters of a search request after shape validation.
#[derive(Debug, PartialEq)]
pub struct SearchFilters {
    pub q: Option<String>,
    pub rate: Option<i64>,
    pub date: Option<String>,
}

// Mathematically-integer check: "18" (string) is not a number, 18.5 has a
// fraction, 18.0 counts as the integer 18.
fn as_integer(value: &Value) -> Option<i64> {
    let n = match value {
        Value::Number(n) => n,
        _ => return None,
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}

// Presence in the loose sense the wire format allows: zero, empty string,
// false and null all count as missing.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Runs the ordered field checks over a talker body. The first failure wins;
/// later fields are never inspected.
pub fn validate_talker(payload: &TalkerPayload) -> Result<NewTalker, ApiError> {
    let name = match payload.name.as_deref() {
        Some(n) if !n.is_empty() => n,
        _ => return Err(ApiError::Validation(r#"O campo "name" é obrigatório"#)),
    };
    if name.chars().count() < 3 {
        return Err(ApiError::Validation(
            r#"O "name" deve ter pelo menos 3 caracteres"#,
        ));
    }

    let age = match &payload.age {
        Some(v) if is_present(v) => v,
        _ => return Err(ApiError::Validation(r#"O campo "age" é obrigatório"#)),
    };
    let age = match as_integer(age) {
        Some(a) if a >= 18 => a,
        _ => {
            return Err(ApiError::Validation(
                r#"O campo "age" deve ser um número inteiro igual ou maior que 18"#,
            ))
        }
    };

    let talk = payload
        .talk
        .as_ref()
        .ok_or(ApiError::Validation(r#"O campo "talk" é obrigatório"#))?;

    let watched_at = match talk.watched_at.as_deref() {
        Some(w) if !w.is_empty() => w,
        _ => return Err(ApiError::Validation(r#"O campo "watchedAt" é obrigatório"#)),
    };
    if !DATE_RE.is_match(watched_at) {
        return Err(ApiError::Validation(
            r#"O campo "watchedAt" deve ter o formato "dd/mm/aaaa""#,
        ));
    }

    let rate = talk
        .rate
        .as_ref()
        .ok_or(ApiError::Validation(r#"O campo "rate" é obrigatório"#))?;
    let rate = match as_integer(rate) {
        Some(r) if (1..=5).contains(&r) => r,
        _ => {
            return Err(ApiError::Validation(
                r#"O campo "rate" deve ser um número inteiro entre 1 e 5"#,
            ))
        }
    };

    Ok(NewTalker {
        name: name.to_string(),
        age,
        talk: Talk {
            watched_at: watched_at.to_string(),
            rate,
        },
    })
}

/// Shape-checks search query parameters. Absent parameters are not errors;
/// they simply leave the corresponding filter off.
pub fn validate_search(query: &SearchQuery) -> Result<SearchFilters, ApiError> {
    let rate = match query.rate.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(r) if (1..=5).contains(&r) => Some(r),
            _ => {
                return Err(ApiError::Validation(
                    r#"O campo "rate" deve ser um número inteiro entre 1 e 5"#,
                ))
            }
        },
    };

    if let Some(date) = query.date.as_deref() {
        if !DATE_RE.is_match(date) {
            return Err(ApiError::Validation(
                r#"O parâmetro "date" deve ter o formato "dd/mm/aaaa""#,
            ));
        }
    }

    Ok(SearchFilters {
        q: query.q.clone(),
        rate,
        date: query.date.clone(),
    })
}
