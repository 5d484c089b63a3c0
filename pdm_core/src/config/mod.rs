pub mod config_check;
pub mod pdm_config;

pub use pdm_config::PdmConfig;
