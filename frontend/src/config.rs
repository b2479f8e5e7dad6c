//! Application configuration.
//!
//! Compile-time settings for the client card frontend.

/// Document title.
pub const APP_NAME: &str = "Клиенты";

/// Console log level set up at startup.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Column template of the desktop card row:
/// row number, avatar, name, object, phone, amount, payments, actions.
pub const DESKTOP_GRID: &str =
    "grid grid-cols-[50px,40px,1fr,120px,120px,140px,140px,80px] gap-3 items-center";
