pub mod data_source;
pub mod provider;
