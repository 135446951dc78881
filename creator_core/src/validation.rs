//! # Input Validation
//!
//! Each calculator declares its form fields as a static slice of
//! [`FieldRule`]s. Validation runs those rules against a partial, untyped
//! form ([`FormValues`]) or against an already-typed input record, and
//! collects every failure into a field-keyed [`ValidationReport`].
//!
//! Validation never panics and never stops at the first error.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::validation::{validate_form, FieldRule, FormValues};
//! use serde_json::json;
//!
//! const FIELDS: &[FieldRule] = &[
//!     FieldRule::number("views", "Views").min(1.0),
//!     FieldRule::number("saves", "Saves").min(0.0),
//! ];
//!
//! let mut form = FormValues::new();
//! form.insert("views".into(), json!("0"));
//!
//! let report = validate_form(FIELDS, &form);
//! assert!(!report.valid);
//! assert_eq!(report.errors["views"], "Views must be at least 1");
//! assert_eq!(report.errors["saves"], "Saves is required");
//! ```

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A partial form: field name to raw value. Numbers may arrive as JSON
/// numbers or numeric strings; `null` and blank strings count as missing.
pub type FormValues = BTreeMap<String, Value>;

/// What kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Finite number
    Number,
    /// One of a fixed set of keys (region codes, niche keys)
    Choice(&'static [&'static str]),
}

/// Declared constraints for one form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    /// Field key, matching the serialized input record
    pub name: &'static str,
    /// Human label used in error messages
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Inclusive lower bound
    pub min: Option<f64>,
    /// Inclusive upper bound
    pub max: Option<f64>,
    /// Value must be strictly greater than zero
    pub positive: bool,
    /// Input granularity hint for forms; not enforced
    pub step: Option<f64>,
}

impl FieldRule {
    /// Required numeric field with no bounds
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        FieldRule {
            name,
            label,
            kind: FieldKind::Number,
            required: true,
            min: None,
            max: None,
            positive: false,
            step: None,
        }
    }

    /// Required choice field
    pub const fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        FieldRule {
            name,
            label,
            kind: FieldKind::Choice(options),
            required: true,
            min: None,
            max: None,
            positive: false,
            step: None,
        }
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    pub const fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    pub const fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Check one present value. Returns the normalized value or an error message.
    fn check(&self, raw: &Value) -> Result<Value, String> {
        match self.kind {
            FieldKind::Number => {
                let number = coerce_number(raw).ok_or_else(|| format!("{} must be a number", self.label))?;
                if let Some(min) = self.min {
                    if number < min {
                        return Err(format!("{} must be at least {}", self.label, min));
                    }
                }
                if let Some(max) = self.max {
                    if number > max {
                        return Err(format!("{} must be at most {}", self.label, max));
                    }
                }
                if self.positive && number <= 0.0 {
                    return Err(format!("{} must be greater than 0", self.label));
                }
                Ok(Value::from(number))
            }
            FieldKind::Choice(options) => {
                let key = raw.as_str().map(|s| s.trim().to_lowercase());
                match key {
                    Some(key) if options.contains(&key.as_str()) => Ok(Value::String(key)),
                    _ => Err(format!("{} must be one of: {}", self.label, options.join(", "))),
                }
            }
        }
    }
}

fn coerce_number(raw: &Value) -> Option<f64> {
    let number = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn is_missing(raw: Option<&Value>) -> bool {
    match raw {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Outcome of validating one form.
///
/// ## JSON Example
///
/// ```json
/// { "valid": false, "errors": { "views": "Views must be at least 1" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    fn from_errors(errors: BTreeMap<String, String>) -> Self {
        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Message for a field, if it failed
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Run every rule and also return the normalized values of the fields that passed.
fn check_all(rules: &[FieldRule], form: &FormValues) -> (Map<String, Value>, BTreeMap<String, String>) {
    let mut normalized = Map::new();
    let mut errors = BTreeMap::new();

    for rule in rules {
        let raw = form.get(rule.name);
        if is_missing(raw) {
            if rule.required {
                errors.insert(rule.name.to_string(), format!("{} is required", rule.label));
            }
            continue;
        }
        // is_missing(None) is true, so raw is present here
        let Some(raw) = raw else { continue };
        match rule.check(raw) {
            Ok(value) => {
                normalized.insert(rule.name.to_string(), value);
            }
            Err(message) => {
                errors.insert(rule.name.to_string(), message);
            }
        }
    }

    (normalized, errors)
}

/// Validate a partial form against a calculator's field rules.
pub fn validate_form(rules: &[FieldRule], form: &FormValues) -> ValidationReport {
    let (_, errors) = check_all(rules, form);
    ValidationReport::from_errors(errors)
}

/// Validate an already-typed input record.
///
/// The record is viewed through its serde representation, so field names in
/// `rules` must match the serialized field names. Non-finite numbers
/// serialize as `null` and are reported as missing.
pub fn validate_input<T: Serialize>(rules: &[FieldRule], input: &T) -> ValidationReport {
    match serde_json::to_value(input) {
        Ok(Value::Object(map)) => {
            let form: FormValues = map.into_iter().collect();
            validate_form(rules, &form)
        }
        Ok(_) | Err(_) => {
            let mut errors = BTreeMap::new();
            errors.insert("_input".to_string(), "Input must be a record of named fields".to_string());
            ValidationReport::from_errors(errors)
        }
    }
}

/// Validate a form and build the typed input record from it.
///
/// Numeric strings are coerced to numbers and choice keys are normalized to
/// lowercase before deserializing. Fields without a rule are dropped.
pub fn parse_form<T: DeserializeOwned>(rules: &[FieldRule], form: &FormValues) -> Result<T, ValidationReport> {
    let (normalized, errors) = check_all(rules, form);
    if !errors.is_empty() {
        return Err(ValidationReport::from_errors(errors));
    }

    serde_json::from_value(Value::Object(normalized)).map_err(|err| {
        let mut errors = BTreeMap::new();
        errors.insert("_form".to_string(), err.to_string());
        ValidationReport::from_errors(errors)
    })
}
