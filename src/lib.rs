// Library for tests to access modules

pub mod config;
pub mod format;
pub mod models;
pub mod provider;
pub mod report;
pub mod sysinfo_repo;
pub mod version;
