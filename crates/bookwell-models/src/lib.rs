//! # Bookwell Models
//!
//! Request payloads (DTOs) and their validation schemas for the Bookwell API.
//!
//! # Modules
//!
//! - [`ids`]: object-id format checks shared by every payload
//! - [`waitlist`]: claiming a waitlist slot
//! - [`settings`]: point-of-sale settings updates
//! - [`roles`]: role scope updates
//! - [`schema`]: per-field presence and JSON type checks on raw bodies
//!
//! Optional fields are `Option`s that are skipped when serialized, so a
//! payload only ever carries the fields the client actually sent.
//!
//! # Example
//!
//! ```ignore
//! use bookwell_models::UpdateRoleDto;
//! use validator::Validate;
//!
//! let dto: UpdateRoleDto = serde_json::from_str(body)?;
//! dto.validate()?;
//! ```

pub mod ids;
pub mod roles;
pub mod schema;
pub mod settings;
pub mod waitlist;

// Re-export commonly used types at crate root for convenience
pub use ids::{is_object_id, validate_object_id};
pub use roles::{RoleUpdatedResponse, UpdateRoleDto};
pub use schema::{BodySchema, FieldKind, FieldSpec, check_shape};
pub use settings::UpdatePosSettingsDto;
pub use waitlist::{ClaimWaitlistDto, WaitlistClaimedResponse};
