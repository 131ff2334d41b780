pub mod cancel;
pub mod command;
pub mod options;
pub mod params;
