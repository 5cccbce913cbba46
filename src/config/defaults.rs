//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::NOSY_API_URL;

/// Default pharmacy directory service root
pub const DEFAULT_API_BASE_URL: &str = NOSY_API_URL;

/// Default request timeout for the directory lookup, in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default maximum number of pharmacies to show
pub const DEFAULT_LIMIT: usize = 20;

/// Insert a promotional slot after every N result cards
pub const DEFAULT_AD_INTERVAL: usize = 3;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "duty-pharmacy";
