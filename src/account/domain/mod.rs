//! Domain model for account management.
//!
//! Form payloads validate presence rules at construction so the services
//! only ever see well-formed requests; anything stronger (uniqueness,
//! credential checks) is the remote API's business.

mod credentials;
mod directory;
mod error;
mod ids;
mod profile;
mod registration;
mod user;

pub use credentials::Credentials;
pub use directory::{DIRECTORY_MATCH_LIMIT, filter_directory};
pub use error::AccountDomainError;
pub use ids::UserId;
pub use profile::ProfileUpdate;
pub use registration::RegistrationRequest;
pub use user::UserRecord;
