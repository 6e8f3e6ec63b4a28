//! Declarative per-field rule chains.
//!
//! A [`RuleSet`] lists fields in declaration order, each with a chain of
//! [`Rule`]s. Every field is checked independently and all failures are
//! collected, so a client sees every problem with its payload at once.
//!
//! Incoming strings are trimmed and blank strings become `null` before any
//! rule runs.

pub mod values;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::i18n::{attribute, trans_with};

pub use values::{date_of, decimal_of, parse_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Must be present and filled.
    Required,
    /// Explicit `null` is accepted and ends the chain.
    Nullable,
    /// Absent fields are skipped entirely.
    Sometimes,
    String,
    Numeric,
    Date,
    Email,
    Min(u64),
    Max(u64),
    /// At most this many fractional digits; trailing zeros do not count.
    Decimals(u32),
    /// Closed value set, in declaration order.
    Enum(&'static [&'static str]),
}

impl Rule {
    fn is_presence(&self) -> bool {
        matches!(self, Rule::Required | Rule::Nullable | Rule::Sometimes)
    }
}

#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub attribute_label: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    fn has(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }
}

/// Field name → messages, in the order the rules were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        field: &'static str,
        attribute_label: &'static str,
        rules: impl Into<Vec<Rule>>,
    ) -> Self {
        self.fields.push(FieldRules {
            field,
            attribute_label,
            rules: rules.into(),
        });
        self
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Same chains with `Sometimes` in front, for partial updates.
    pub fn for_update(&self) -> RuleSet {
        let fields = self
            .fields
            .iter()
            .map(|f| {
                let mut rules = Vec::with_capacity(f.rules.len() + 1);
                rules.push(Rule::Sometimes);
                rules.extend(f.rules.iter().copied().filter(|r| *r != Rule::Sometimes));
                FieldRules {
                    field: f.field,
                    attribute_label: f.attribute_label,
                    rules,
                }
            })
            .collect();
        RuleSet { fields }
    }

    /// Validates `payload`. Non-object payloads are treated as empty.
    pub fn validate(&self, payload: &Value) -> Result<ValidatedInput, FieldErrors> {
        let empty = Map::new();
        let object = payload.as_object().unwrap_or(&empty);

        let mut errors = FieldErrors::default();
        let mut validated = Map::new();

        for chain in &self.fields {
            let value = object.get(chain.field).map(normalize);
            let before = errors.len();

            if let Some(value) = check_field(chain, value.as_ref(), &mut errors) {
                if errors.len() == before {
                    validated.insert(chain.field.to_string(), value);
                }
            }
        }

        if errors.is_empty() {
            Ok(ValidatedInput(validated))
        } else {
            Err(errors)
        }
    }
}

fn normalize(value: &Value) -> Value {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::String(trimmed.to_string())
            }
        }
        other => other.clone(),
    }
}

/// Runs one chain. Returns the value to keep when the field was present.
fn check_field(
    chain: &FieldRules,
    value: Option<&Value>,
    errors: &mut FieldErrors,
) -> Option<Value> {
    if chain.has(Rule::Sometimes) && value.is_none() {
        return None;
    }

    let label = attribute(chain.attribute_label);
    let filled = value.map(values::is_filled).unwrap_or(false);

    if chain.has(Rule::Required) && !filled {
        errors.add(
            chain.field,
            trans_with("validation.required", &[("attribute", label.as_str())]),
        );
        return None;
    }

    let value = value?;
    if value.is_null() && chain.has(Rule::Nullable) {
        return Some(Value::Null);
    }

    let numeric = chain.has(Rule::Numeric);
    for rule in chain.rules.iter().filter(|r| !r.is_presence()) {
        if let Some(message) = failure_message(*rule, value, numeric, &label) {
            errors.add(chain.field, message);
        }
    }

    Some(value.clone())
}

fn failure_message(rule: Rule, value: &Value, numeric: bool, label: &str) -> Option<String> {
    let attr = ("attribute", label);
    match rule {
        Rule::Required | Rule::Nullable | Rule::Sometimes => None,
        Rule::String => (!value.is_string()).then(|| trans_with("validation.string", &[attr])),
        Rule::Numeric => {
            decimal_of(value)
                .is_none()
                .then(|| trans_with("validation.numeric", &[attr]))
        }
        Rule::Date => date_of(value)
            .is_none()
            .then(|| trans_with("validation.date", &[attr])),
        Rule::Email => {
            let valid = value
                .as_str()
                .map(validator::validate_email)
                .unwrap_or(false);
            (!valid).then(|| trans_with("validation.email", &[attr]))
        }
        Rule::Min(min) => (!within(value, numeric, |size| size >= Decimal::from(min)))
            .then(|| size_message("min", min, value, numeric, label)),
        Rule::Max(max) => (!within(value, numeric, |size| size <= Decimal::from(max)))
            .then(|| size_message("max", max, value, numeric, label)),
        Rule::Decimals(places) => {
            // non-numbers are reported by the numeric rule
            let ok = decimal_of(value)
                .map(|d| d.normalize().scale() <= places)
                .unwrap_or(true);
            (!ok).then(|| {
                trans_with(
                    "validation.decimal",
                    &[attr, ("decimal", places.to_string().as_str())],
                )
            })
        }
        Rule::Enum(allowed) => {
            let ok = value.as_str().map(|s| allowed.contains(&s)).unwrap_or(false);
            (!ok).then(|| {
                trans_with(
                    "validation.enum",
                    &[attr, ("values", allowed.join(", ").as_str())],
                )
            })
        }
    }
}

fn within(value: &Value, numeric: bool, check: impl Fn(Decimal) -> bool) -> bool {
    let size = if numeric {
        match decimal_of(value) {
            Some(n) => n,
            // the numeric rule reports this one
            None => return true,
        }
    } else {
        Decimal::from(values::text_size(value))
    };
    check(size)
}

fn size_message(kind: &str, bound: u64, value: &Value, numeric: bool, label: &str) -> String {
    let flavour = if numeric {
        "numeric"
    } else if value.is_array() {
        "array"
    } else {
        "string"
    };
    let bound = bound.to_string();
    trans_with(
        &format!("validation.{}.{}", kind, flavour),
        &[("attribute", label), (kind, bound.as_str())],
    )
}

/// Fields that passed their chains, keyed by field name. Only fields that
/// have rules and were present in the payload are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedInput(Map<String, Value>);

impl ValidatedInput {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Present non-null string.
    pub fn string(&self, field: &str) -> Option<String> {
        self.0.get(field).and_then(Value::as_str).map(str::to_string)
    }

    /// `Some(None)` when the field was sent as `null`.
    pub fn nullable_string(&self, field: &str) -> Option<Option<String>> {
        self.0
            .get(field)
            .map(|v| v.as_str().map(str::to_string))
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        self.0.get(field).and_then(date_of)
    }

    pub fn nullable_date(&self, field: &str) -> Option<Option<NaiveDate>> {
        self.0.get(field).map(date_of)
    }

    pub fn nullable_decimal(&self, field: &str) -> Option<Option<Decimal>> {
        self.0.get(field).map(decimal_of)
    }
}
