//! Service settings for the workforce engine.

mod settings;

pub use settings::Settings;
