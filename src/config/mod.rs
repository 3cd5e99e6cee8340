//! Configuration: file locations under `~/.taskline/` and user settings.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
