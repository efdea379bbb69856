//! Core services orchestrating the providers: certificate record store,
//! public verification gate and session/access gate.

pub mod certificate_service;
pub mod error;
pub mod session_service;
pub mod verification_service;
