
use std::env;

use tempfile::TempDir;

/// Variables read by `Config::load`; cleared for every test.
const CONFIG_ENV_VARS: &[&str] = &[
    "DATABASE_URI",
    "UA_SERVER_HOST",
    "UA_SERVER_PORT",
    "UA_DATABASE_MAX_CONNECTIONS",
    "UA_LOG_LEVEL",
    "UA_LOG_COLORED",
    "UA_LOG_FILE",
    "UA_VALIDATION_MAX_NAME_LENGTH",
    "UA_VALIDATION_MAX_EMAIL_LENGTH",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point UA_CONFIG_DIR at it and clear overrides
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = CONFIG_ENV_VARS
        .iter()
        .map(|key| EnvGuard::remove(*key))
        .collect();
    guards.push(EnvGuard::set(
        "UA_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));
    (temp, guards)
}
