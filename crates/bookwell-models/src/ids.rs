//! Object identifiers.
//!
//! Records are addressed by 24-character hexadecimal object ids
//! (e.g. `64b7f0c2a1b2c3d4e5f60718`).

use validator::ValidationError;

pub const OBJECT_ID_LEN: usize = 24;

pub fn is_object_id(value: &str) -> bool {
    value.len() == OBJECT_ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `validator` custom check for object-id fields. The field declaration
/// supplies the message.
pub fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if is_object_id(value) {
        return Ok(());
    }

    Err(ValidationError::new("object_id"))
}
