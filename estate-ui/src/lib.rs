pub mod csv_export;
pub mod format;
pub mod logging;
pub mod screens;
pub mod settings;
pub mod state;
pub mod utils;
