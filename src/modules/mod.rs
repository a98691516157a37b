pub mod roles;
pub mod settings;
pub mod waitlist;
