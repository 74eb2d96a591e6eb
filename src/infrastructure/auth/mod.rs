//! Authentication infrastructure module
//!
//! Verification of bearer tokens issued by the external identity service.

mod jwt;

pub use jwt::{AuthClaims, JwtService, TokenVerifier};
