use std::fmt;

use thiserror::Error;

/// Stable identifier of a failed rule, one per rule kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `required` saw the zero value.
    FieldRequired,
    /// `format:X` predicate rejected the value.
    InvalidFormat,
    /// `max=n` exceeded.
    FieldExceedsMaxLen,
    /// `min=n` not reached.
    FieldBelowMinLen,
    /// `lt=n` not satisfied.
    FieldExceedsMaxVal,
    /// `gte=n` not satisfied.
    FieldBelowMinVal,
}

impl ErrorKind {
    /// The comparable string constant, e.g. `ErrFieldRequired`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FieldRequired => "ErrFieldRequired",
            ErrorKind::InvalidFormat => "ErrInvalidFormat",
            ErrorKind::FieldExceedsMaxLen => "ErrFieldExceedsMaxLen",
            ErrorKind::FieldBelowMinLen => "ErrFieldBelowMinLen",
            ErrorKind::FieldExceedsMaxVal => "ErrFieldExceedsMaxVal",
            ErrorKind::FieldBelowMinVal => "ErrFieldBelowMinVal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First rule a record failed.
///
/// Renders as `<ErrorKind>: <TypeName>.<FieldName>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {type_name}.{field}")]
pub struct Violation {
    /// Which rule failed.
    pub kind: ErrorKind,
    /// Record type name.
    pub type_name: &'static str,
    /// Field the rule is attached to.
    pub field: &'static str,
}

/// Malformed rule declaration, raised while compiling a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Token is neither a known rule nor a registered format.
    #[error("{type_name}.{field}: unknown rule '{rule}'")]
    UnknownRule {
        type_name: &'static str,
        field: &'static str,
        rule: String,
    },
    /// `format:X` names an unregistered format.
    #[error("{type_name}.{field}: unknown format '{format}'")]
    UnknownFormat {
        type_name: &'static str,
        field: &'static str,
        format: String,
    },
    /// Threshold missing or not an integer.
    #[error("{type_name}.{field}: rule '{rule}' expects a numeric threshold, got '{value}'")]
    InvalidThreshold {
        type_name: &'static str,
        field: &'static str,
        rule: String,
        value: String,
    },
    /// Rule kind does not match the declared field kind.
    #[error("{type_name}.{field}: rule '{rule}' does not apply to {kind} fields")]
    NotApplicable {
        type_name: &'static str,
        field: &'static str,
        rule: String,
        kind: &'static str,
    },
    #[error("{type_name}: field '{field}' declared twice")]
    DuplicateField {
        type_name: &'static str,
        field: &'static str,
    },
}
