mod pages;
pub mod system;

pub use pages::serve_page;
pub use system::{HealthResponse, health};
