pub mod admin;
pub mod credential;
pub mod member;
pub mod payment;

pub use admin::Admin;
pub use credential::Credential;
pub use member::Member;
pub use payment::Payment;
