//! Configuration module

mod site;

pub use site::ContentConfig;
pub use site::IndexConfig;
pub use site::SiteConfig;
