//! Command implementations

pub mod about;
pub mod cipher;
pub mod keys;
pub mod table;
pub mod validate;
