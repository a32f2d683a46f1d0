//! Outgoing account mail (confirmation and password-reset links).

pub mod mailer;

pub use mailer::{LogMailer, Mailer, MemoryMailer, OutgoingMail};
