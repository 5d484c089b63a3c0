pub mod enums;
pub mod pdm_error;
pub mod time;
pub mod utils;
