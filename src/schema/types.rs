use std::fmt;

/// A fixed-width little-endian integer description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    /// Byte width: 1, 2, 4 or 8.
    pub width: u8,
    pub signed: bool,
}

impl Primitive {
    pub const U8: Primitive = Primitive { width: 1, signed: false };
    pub const U16: Primitive = Primitive { width: 2, signed: false };
    pub const U32: Primitive = Primitive { width: 4, signed: false };
    pub const U64: Primitive = Primitive { width: 8, signed: false };
    pub const I8: Primitive = Primitive { width: 1, signed: true };
    pub const I16: Primitive = Primitive { width: 2, signed: true };
    pub const I32: Primitive = Primitive { width: 4, signed: true };
    pub const I64: Primitive = Primitive { width: 8, signed: true };

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Parse a primitive type name as spelled in interface definitions.
    pub fn from_name(name: &str) -> Option<Primitive> {
        match name {
            "u8" => Some(Primitive::U8),
            "u16" => Some(Primitive::U16),
            "u32" => Some(Primitive::U32),
            "u64" => Some(Primitive::U64),
            "i8" => Some(Primitive::I8),
            "i16" => Some(Primitive::I16),
            "i32" => Some(Primitive::I32),
            "i64" => Some(Primitive::I64),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.width as u16 * 8)
    }
}

/// The declared shape of an instruction's return value.
///
/// A closed set: adding a shape means adding a variant here and a decode arm
/// in the codec, nothing dynamic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    Primitive(Primitive),
    /// Ordered `(field name, field type)` pairs; declared order is decode
    /// order.
    Struct(Vec<(String, Primitive)>),
    /// Length-prefixed sequence of one element type.
    Vector(Primitive),
}

impl ReturnType {
    /// Smallest payload (in bytes) that can possibly decode as this type.
    /// A shorter payload is rejected up front, never zero-padded.
    pub fn min_width(&self) -> usize {
        match self {
            ReturnType::Primitive(p) => p.width(),
            ReturnType::Struct(fields) => fields.iter().map(|(_, p)| p.width()).sum(),
            // The length prefix alone; elements are checked against the
            // decoded length.
            ReturnType::Vector(_) => 4,
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Primitive(p) => write!(f, "{}", p),
            ReturnType::Struct(fields) => {
                let fields: Vec<String> =
                    fields.iter().map(|(n, p)| format!("{}: {}", n, p)).collect();
                write!(f, "{{{}}}", fields.join(", "))
            }
            ReturnType::Vector(p) => write!(f, "Vec<{}>", p),
        }
    }
}

/// Whether an instruction can change on-chain state.
///
/// Computed once when the interface is loaded and never revisited: an
/// instruction is `Mutating` if any of its accounts is writable or must
/// sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    ReadOnly,
    Mutating,
}

/// One account argument as declared by the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSchema {
    pub name: String,
    pub writable: bool,
    pub signer: bool,
}

/// Everything the client needs to know about one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSchema {
    pub name: String,
    pub accounts: Vec<AccountSchema>,
    /// Declared return shape, if the instruction returns anything at all.
    pub returns: Option<ReturnType>,
    pub mutability: Mutability,
}

impl InstructionSchema {
    pub fn new(
        name: impl Into<String>,
        accounts: Vec<AccountSchema>,
        returns: Option<ReturnType>,
    ) -> Self {
        let mutability = if accounts.iter().any(|a| a.writable || a.signer) {
            Mutability::Mutating
        } else {
            Mutability::ReadOnly
        };
        Self {
            name: name.into(),
            accounts,
            returns,
            mutability,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
