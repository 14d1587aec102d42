//! Framework-independent page logic shared by the server and the client bundle.
//!
//! - Page metadata and the document shell
//! - Route paths and resolution
//! - The welcome screen and its injected navigation capability

mod error;
pub mod html;
mod metadata;
mod navigation;
pub mod pages;
mod routes;
#[cfg(test)]
mod routes_test;
mod shell;
pub mod welcome;

pub use error::{SiteError, SiteResult};
pub use metadata::{DESCRIPTION, LANG, PageMetadata, TITLE};
pub use navigation::Navigator;
pub use routes::{Route, RoutePath};
pub use shell::{DocumentShell, HeadMode, MOUNT_ID, ShellAssets, mount_point};
pub use welcome::WelcomeScreen;
