//! Registration domain: the wizard's working draft and the account records
//! the backend hands back.

pub mod account;
pub mod draft;

pub use account::{AccountId, LoginSession, RegisteredAccount};
pub use draft::{IdentityFields, RegisterRequest, RegistrationDraft};
