pub mod admin;
pub mod credential;
pub mod member;
pub mod payment;

pub use member::{Plan, USAGE_CAP};
