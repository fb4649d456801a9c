//! Decoded return values and their display formatting.

use std::fmt;

/// One decoded fixed-width integer, widened to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Unsigned(u64),
    Signed(i64),
}

impl Scalar {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Scalar::Unsigned(v) => Some(*v),
            Scalar::Signed(v) => u64::try_from(*v).ok(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Signed(v) => Some(*v),
            Scalar::Unsigned(v) => i64::try_from(*v).ok(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Unsigned(v) => write!(f, "{}", v),
            Scalar::Signed(v) => write!(f, "{}", v),
        }
    }
}

/// A fully decoded return value.
///
/// Struct fields keep their declared order for deterministic formatting;
/// lookup is by name via [`ReturnValue::field`]. The value owns its data —
/// nothing borrows from the payload buffer after the decode call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnValue {
    Scalar(Scalar),
    Struct(Vec<(String, Scalar)>),
    Vector(Vec<Scalar>),
}

impl ReturnValue {
    /// Look up a struct field by name. `None` for non-struct values or
    /// unknown names.
    pub fn field(&self, name: &str) -> Option<&Scalar> {
        match self {
            ReturnValue::Struct(fields) => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ReturnValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Scalar]> {
        match self {
            ReturnValue::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnValue::Scalar(s) => write!(f, "{}", s),
            ReturnValue::Struct(fields) => {
                let fields: Vec<String> =
                    fields.iter().map(|(n, v)| format!("{}: {}", n, v)).collect();
                write!(f, "{{{}}}", fields.join(", "))
            }
            ReturnValue::Vector(values) => {
                let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", values.join(", "))
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
