//! Authentication tree node that emails a one-time password to the
//! authenticated user through the IDM email service.
//!
//! The host tree engine supplies session state, environment properties and
//! identity lookup through the traits in [`state`]; [`SendHotpNode`] performs
//! one send attempt and maps the result to a tree [`Outcome`].

pub mod config;
pub mod dto;
pub mod node;
pub mod outcome;
pub mod service;
pub mod state;

pub use config::{Config, load_config};
pub use dto::SendEmailRequest;
pub use node::SendHotpNode;
pub use outcome::Outcome;
pub use service::{EmailServiceError, EmailServiceResponse, EmailTransport, IdmEmailService};
pub use state::{IdRepository, NodeState, SystemEnv};
