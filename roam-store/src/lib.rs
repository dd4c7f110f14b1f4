pub mod app_config;
pub mod package_client;

pub use app_config::Config;
pub use package_client::HttpPackageSource;
