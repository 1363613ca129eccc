use std::path::PathBuf;

const APP_DIR_NAME: &str = "SpeedPlay";
const SETTINGS_FILE_NAME: &str = "player.json";

fn config_base() -> PathBuf {
    std::env::var("APPDATA")
        .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|_| std::env::temp_dir())
}

pub fn app_config_root() -> PathBuf {
    config_base().join(APP_DIR_NAME)
}

pub fn settings_path() -> PathBuf {
    app_config_root().join(SETTINGS_FILE_NAME)
}
