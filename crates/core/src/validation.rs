use std::fmt;
use std::marker::PhantomData;

use crate::error::{RuleError, Violation};
use crate::format::FormatRegistry;
use crate::rule::{parse_rules, FieldKind, FieldValue, Rule};

/// Static declaration of one record field: name, kind and rule string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as reported in violations.
    pub name: &'static str,
    /// Declared value kind.
    pub kind: FieldKind,
    /// Comma-separated rules, e.g. `"required,max=255"`.
    pub rules: &'static str,
}

impl FieldSpec {
    /// String field.
    pub const fn str(name: &'static str, rules: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Str,
            rules,
        }
    }

    /// Integer field.
    pub const fn int(name: &'static str, rules: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Int,
            rules,
        }
    }
}

/// A type whose fields carry rule declarations.
///
/// `FIELDS` order is the evaluation order.
pub trait Record {
    /// Type name as reported in violations.
    const TYPE_NAME: &'static str;

    /// Field declarations in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Current value of a declared field.
    ///
    /// `None` is validated as the zero value of the declared kind.
    fn value(&self, field: &str) -> Option<FieldValue<'_>>;
}

struct CompiledField {
    name: &'static str,
    kind: FieldKind,
    rules: Vec<Rule>,
}

/// Compiled rule table for a record type.
///
/// Compile once at startup and share; validation only reads it.
pub struct Schema<R> {
    fields: Vec<CompiledField>,
    _record: PhantomData<fn(&R)>,
}

impl<R: Record> Schema<R> {
    /// Parses every field's rule declaration against `formats`.
    pub fn compile(formats: &FormatRegistry) -> Result<Self, RuleError> {
        let mut fields: Vec<CompiledField> = Vec::with_capacity(R::FIELDS.len());
        for spec in R::FIELDS {
            if fields.iter().any(|f| f.name == spec.name) {
                return Err(RuleError::DuplicateField {
                    type_name: R::TYPE_NAME,
                    field: spec.name,
                });
            }
            let rules = parse_rules(R::TYPE_NAME, spec.name, spec.kind, spec.rules, formats)?;
            fields.push(CompiledField {
                name: spec.name,
                kind: spec.kind,
                rules,
            });
        }
        tracing::debug!(
            record = R::TYPE_NAME,
            fields = fields.len(),
            "compiled validation schema"
        );
        Ok(Self {
            fields,
            _record: PhantomData,
        })
    }

    /// Returns the first violated rule, fields then rules in declaration order.
    pub fn validate(&self, record: &R) -> Result<(), Violation> {
        for field in &self.fields {
            if field.rules.is_empty() {
                continue;
            }
            let value = record
                .value(field.name)
                .unwrap_or_else(|| FieldValue::zero(field.kind));
            if let Some(rule) = field.rules.iter().find(|rule| !rule.check(value)) {
                return Err(Violation {
                    kind: rule.error_kind(),
                    type_name: R::TYPE_NAME,
                    field: field.name,
                });
            }
        }
        Ok(())
    }

    /// Record type name.
    pub fn type_name(&self) -> &'static str {
        R::TYPE_NAME
    }
}

impl<R: Record> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Schema");
        s.field("record", &R::TYPE_NAME);
        for field in &self.fields {
            s.field(field.name, &field.rules);
        }
        s.finish()
    }
}
