//! The resolved, immutable instruction table for one deployed program.

use crate::schema::types::{InstructionSchema, ReturnType};
use crate::{ClientError, Result};
use std::collections::HashMap;

/// All instruction schemas of one program, keyed by instruction name.
///
/// Built once (normally via [`crate::schema::idl::parse_interface`]) and
/// never mutated afterwards, so it can sit behind an `Arc` and be shared
/// across concurrent decode and view calls without locking.
#[derive(Debug, Clone)]
pub struct ProgramInterface {
    program_id: String,
    instructions: HashMap<String, InstructionSchema>,
}

impl ProgramInterface {
    pub fn new(program_id: impl Into<String>, instructions: Vec<InstructionSchema>) -> Self {
        let instructions = instructions
            .into_iter()
            .map(|schema| (schema.name.clone(), schema))
            .collect();
        Self {
            program_id: program_id.into(),
            instructions,
        }
    }

    /// The opaque identifier of the deployed program. Matched textually
    /// against return log entries, never parsed.
    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    pub fn instruction(&self, name: &str) -> Option<&InstructionSchema> {
        self.instructions.get(name)
    }

    /// Declared return type of `name`, or `UnknownInstruction` if the
    /// interface has no such instruction, or `UnsupportedType` if it
    /// declares none.
    pub fn return_type(&self, name: &str) -> Result<&ReturnType> {
        let schema = self
            .instruction(name)
            .ok_or_else(|| ClientError::UnknownInstruction(name.to_string()))?;
        schema.returns.as_ref().ok_or_else(|| {
            ClientError::UnsupportedType(format!("instruction '{}' declares no return type", name))
        })
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::Primitive;
    use crate::ClientError;

    fn sample() -> ProgramInterface {
        ProgramInterface::new(
            "BJYS8QEhSCk4pgtn6oArSEYNScMeTJmrNCVAzsEHaba3",
            vec![
                InstructionSchema::new(
                    "return_u64",
                    vec![],
                    Some(ReturnType::Primitive(Primitive::U64)),
                ),
                InstructionSchema::new("initialize", vec![], None),
            ],
        )
    }

    #[test]
    fn lookup_by_name() {
        let interface = sample();
        assert_eq!(interface.len(), 2);
        assert!(interface.instruction("return_u64").is_some());
        assert!(interface.instruction("missing").is_none());
    }

    #[test]
    fn return_type_errors_are_distinct() {
        let interface = sample();
        assert!(matches!(
            interface.return_type("missing"),
            Err(ClientError::UnknownInstruction(_))
        ));
        assert!(matches!(
            interface.return_type("initialize"),
            Err(ClientError::UnsupportedType(_))
        ));
        assert_eq!(
            interface.return_type("return_u64").unwrap(),
            &ReturnType::Primitive(Primitive::U64)
        );
    }
}
