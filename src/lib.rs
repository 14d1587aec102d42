pub mod site;

#[cfg(feature = "backend")]
pub mod api;
