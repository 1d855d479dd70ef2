//! Interactive file-list surface.
//!
//! [`Session`] holds the list and applies [`Command`]s; [`Shell`] is the
//! text front-end used when the binary starts without arguments.

pub mod notify;
pub mod session;
pub mod shell;

pub use notify::{Notification, NotificationLevel, NotificationSink};
pub use session::{Command, Session, file_uri_to_path};
pub use shell::Shell;
