//! Interface loading from Anchor-style IDL JSON documents.
//!
//! The IDL is a loosely-typed description of a deployed program. This module
//! resolves it **once** into the typed [`ProgramInterface`] table; nothing
//! downstream ever looks at the JSON again.
//!
//! # Key responsibilities
//! - Parse instruction names, account flags (`isMut` / `isSigner`) and
//!   declared `returns` types.
//! - Resolve `{"defined": …}` references against the document's `types`
//!   section into flat struct schemas.
//! - Reject any return shape outside the primitive / struct / vector space
//!   with a [`ClientError::UnsupportedType`], rather than deferring the
//!   surprise to decode time.

use crate::schema::interface::ProgramInterface;
use crate::schema::types::{AccountSchema, InstructionSchema, Primitive, ReturnType};
use crate::{ClientError, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Deserialize)]
struct RawIdl {
    instructions: Vec<RawInstruction>,
    #[serde(default)]
    types: Vec<RawTypeDef>,
}

#[derive(Deserialize)]
struct RawInstruction {
    name: String,
    #[serde(default)]
    accounts: Vec<RawAccount>,
    #[serde(default)]
    returns: Option<JsonValue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAccount {
    name: String,
    #[serde(default)]
    is_mut: bool,
    #[serde(default)]
    is_signer: bool,
}

#[derive(Deserialize)]
struct RawTypeDef {
    name: String,
    #[serde(rename = "type")]
    ty: JsonValue,
}

/// Parse an IDL JSON document into the typed instruction table.
///
/// `program_id` is supplied by the caller (the IDL itself does not reliably
/// carry the deployed address) and is only ever matched textually.
pub fn parse_interface(program_id: &str, idl_json: &str) -> Result<ProgramInterface> {
    let raw: RawIdl = serde_json::from_str(idl_json)
        .map_err(|e| ClientError::InvalidInterface(e.to_string()))?;

    let defined: HashMap<&str, &JsonValue> = raw
        .types
        .iter()
        .map(|def| (def.name.as_str(), &def.ty))
        .collect();

    let mut instructions = Vec::with_capacity(raw.instructions.len());
    for instruction in &raw.instructions {
        let returns = instruction
            .returns
            .as_ref()
            .map(|ty| resolve_return_type(ty, &defined))
            .transpose()?;
        let accounts = instruction
            .accounts
            .iter()
            .map(|a| AccountSchema {
                name: a.name.clone(),
                writable: a.is_mut,
                signer: a.is_signer,
            })
            .collect();
        let schema = InstructionSchema::new(instruction.name.clone(), accounts, returns);
        debug!(
            instruction = %schema.name,
            mutability = ?schema.mutability,
            "Resolved instruction schema"
        );
        instructions.push(schema);
    }

    info!(
        program = program_id,
        instructions = instructions.len(),
        "Loaded program interface"
    );
    Ok(ProgramInterface::new(program_id, instructions))
}

/// Resolve one `returns` type expression into a [`ReturnType`].
fn resolve_return_type(
    ty: &JsonValue,
    defined: &HashMap<&str, &JsonValue>,
) -> Result<ReturnType> {
    match ty {
        JsonValue::String(name) => primitive_from_name(name).map(ReturnType::Primitive),
        JsonValue::Object(obj) => {
            if let Some(element) = obj.get("vec") {
                let name = element.as_str().ok_or_else(|| {
                    ClientError::UnsupportedType(format!(
                        "vector of non-primitive elements: {}",
                        element
                    ))
                })?;
                return primitive_from_name(name).map(ReturnType::Vector);
            }
            if let Some(reference) = obj.get("defined") {
                let name = reference.as_str().ok_or_else(|| {
                    ClientError::InvalidInterface(format!("non-string defined reference: {}", reference))
                })?;
                let def = defined.get(name).ok_or_else(|| {
                    ClientError::InvalidInterface(format!("no type definition named '{}'", name))
                })?;
                return resolve_struct(name, def);
            }
            Err(ClientError::UnsupportedType(ty.to_string()))
        }
        _ => Err(ClientError::UnsupportedType(ty.to_string())),
    }
}

/// Resolve a `{"kind": "struct", "fields": […]}` type definition.
fn resolve_struct(name: &str, def: &JsonValue) -> Result<ReturnType> {
    let kind = def.get("kind").and_then(JsonValue::as_str);
    if kind != Some("struct") {
        return Err(ClientError::UnsupportedType(format!(
            "type '{}' is not a struct",
            name
        )));
    }
    let raw_fields = def
        .get("fields")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| {
            ClientError::InvalidInterface(format!("struct '{}' has no fields array", name))
        })?;

    let mut fields = Vec::with_capacity(raw_fields.len());
    for field in raw_fields {
        let field_name = field
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                ClientError::InvalidInterface(format!("unnamed field in struct '{}'", name))
            })?;
        let type_name = field
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                ClientError::UnsupportedType(format!(
                    "field '{}.{}' is not a fixed-width integer",
                    name, field_name
                ))
            })?;
        fields.push((field_name.to_string(), primitive_from_name(type_name)?));
    }
    Ok(ReturnType::Struct(fields))
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn primitive_from_name(name: &str) -> Result<Primitive> {
    Primitive::from_name(name).ok_or_else(|| ClientError::UnsupportedType(name.to_string()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
