//! Resume builder: HTTP API, AI text improvement and the client-side wizard
//! that assembles a resume before submitting it.

pub mod client;
pub mod config;
pub mod errors;
pub mod improve;
pub mod llm_client;
pub mod models;
pub mod preview;
pub mod resumes;
pub mod routes;
pub mod state;
pub mod validation;
pub mod wizard;
