use crate::error::{ErrorKind, RuleError};
use crate::format::{FormatCheck, FormatRegistry};

/// Declared kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string.
    Str,
    /// Signed 64-bit integer.
    Int,
}

impl FieldKind {
    fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::Int => "integer",
        }
    }
}

/// Borrowed value of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// String value.
    Str(&'a str),
    /// Integer value.
    Int(i64),
}

impl FieldValue<'_> {
    /// Zero value for a kind: `""` or `0`.
    pub fn zero(kind: FieldKind) -> FieldValue<'static> {
        match kind {
            FieldKind::Str => FieldValue::Str(""),
            FieldKind::Int => FieldValue::Int(0),
        }
    }

    /// True for `""` and `0`.
    ///
    /// An integer field that legitimately holds 0 is indistinguishable from
    /// an unset one, so `required` rejects it.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Int(n) => *n == 0,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Str(value.as_str())
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

/// A single compiled constraint.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must not be the zero value.
    Required,
    /// String must satisfy the named format.
    Format {
        /// Registered format name.
        name: String,
        /// Resolved predicate.
        check: FormatCheck,
    },
    /// String length (chars) must be `<= n`.
    MaxLen(usize),
    /// String length (chars) must be `>= n`.
    MinLen(usize),
    /// Integer must be `< n`.
    Lt(i64),
    /// Integer must be `>= n`.
    Gte(i64),
}

impl Rule {
    /// Error kind reported when this rule fails.
    pub fn error_kind(&self) -> ErrorKind {
        match self {
            Rule::Required => ErrorKind::FieldRequired,
            Rule::Format { .. } => ErrorKind::InvalidFormat,
            Rule::MaxLen(_) => ErrorKind::FieldExceedsMaxLen,
            Rule::MinLen(_) => ErrorKind::FieldBelowMinLen,
            Rule::Lt(_) => ErrorKind::FieldExceedsMaxVal,
            Rule::Gte(_) => ErrorKind::FieldBelowMinVal,
        }
    }

    /// Evaluates the rule. Kind-specific rules fail on a value of the other kind.
    pub fn check(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required, v) => !v.is_zero(),
            (Rule::Format { check, .. }, FieldValue::Str(s)) => check(s),
            (Rule::MaxLen(n), FieldValue::Str(s)) => s.chars().count() <= *n,
            (Rule::MinLen(n), FieldValue::Str(s)) => s.chars().count() >= *n,
            (Rule::Lt(n), FieldValue::Int(v)) => v < *n,
            (Rule::Gte(n), FieldValue::Int(v)) => v >= *n,
            _ => false,
        }
    }

    fn applies_to(&self, kind: FieldKind) -> bool {
        match self {
            Rule::Required => true,
            Rule::Format { .. } | Rule::MaxLen(_) | Rule::MinLen(_) => kind == FieldKind::Str,
            Rule::Lt(_) | Rule::Gte(_) => kind == FieldKind::Int,
        }
    }
}

/// Parses one field's rule declaration, e.g. `"required,max=255"`.
///
/// Rules come back in declaration order. An empty declaration yields no rules.
pub fn parse_rules(
    type_name: &'static str,
    field: &'static str,
    kind: FieldKind,
    decl: &str,
    formats: &FormatRegistry,
) -> Result<Vec<Rule>, RuleError> {
    let mut rules = Vec::new();
    for token in decl.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let rule = parse_token(type_name, field, token, formats)?;
        if !rule.applies_to(kind) {
            return Err(RuleError::NotApplicable {
                type_name,
                field,
                rule: token.to_string(),
                kind: kind.as_str(),
            });
        }
        rules.push(rule);
    }
    Ok(rules)
}

fn parse_token(
    type_name: &'static str,
    field: &'static str,
    token: &str,
    formats: &FormatRegistry,
) -> Result<Rule, RuleError> {
    let (name, arg) = match token.split_once(['=', ':']) {
        Some((name, arg)) => (name.trim(), Some(arg.trim())),
        None => (token, None),
    };

    let threshold_err = |value: &str| RuleError::InvalidThreshold {
        type_name,
        field,
        rule: name.to_string(),
        value: value.to_string(),
    };

    match (name, arg) {
        ("required", None) => Ok(Rule::Required),
        ("format", Some(format)) => match formats.get(format) {
            Some(check) => Ok(Rule::Format {
                name: format.to_string(),
                check,
            }),
            None => Err(RuleError::UnknownFormat {
                type_name,
                field,
                format: format.to_string(),
            }),
        },
        ("max", Some(v)) => v.parse().map(Rule::MaxLen).map_err(|_| threshold_err(v)),
        ("min", Some(v)) => v.parse().map(Rule::MinLen).map_err(|_| threshold_err(v)),
        ("lt", Some(v)) => v.parse().map(Rule::Lt).map_err(|_| threshold_err(v)),
        ("gte", Some(v)) => v.parse().map(Rule::Gte).map_err(|_| threshold_err(v)),
        ("max" | "min" | "lt" | "gte", None) => Err(threshold_err("")),
        (shorthand, None) => match formats.get(shorthand) {
            // Bare registered format name, e.g. `tag`.
            Some(check) => Ok(Rule::Format {
                name: shorthand.to_string(),
                check,
            }),
            None => Err(RuleError::UnknownRule {
                type_name,
                field,
                rule: token.to_string(),
            }),
        },
        _ => Err(RuleError::UnknownRule {
            type_name,
            field,
            rule: token.to_string(),
        }),
    }
}
