//! Bearer-token authentication
//!
//! Access tokens are HS256 JWTs whose `sub` claim is the user id.

pub mod bearer;
pub mod jwt;

pub use bearer::bearer_token;
pub use jwt::{AccessClaims, JwtService};
