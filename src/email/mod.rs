//! Outgoing email.
//!
//! `EmailService` assembles plain-text envelopes and hands them to a
//! `MailTransport`. SMTP delivery is done by lettre.

mod service;
mod transport;
mod types;

pub use service::EmailService;
pub use transport::{LogMailTransport, MailTransport, SmtpMailTransport, TransportError};
pub use types::{DiagnosticMessage, Envelope, SmtpConfig};
