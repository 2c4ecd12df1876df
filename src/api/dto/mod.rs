//! Data Transfer Objects for request/response serialization.

pub mod health;
pub mod shorten;
pub mod url_list;
