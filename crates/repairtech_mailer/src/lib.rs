// --- File: crates/repairtech_mailer/src/lib.rs ---

pub mod client;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod service;
pub mod template;

// Re-export for main backend
pub use client::{MailerClient, SendEmailResponse};
pub use error::MailerError;
pub use logic::{dispatch_ticket_email, send_ticket_email, TicketEmail};
pub use routes::routes;
pub use service::CollaboratorMailService;
