use lazy_static::lazy_static;
use std::env;
use std::path::PathBuf;

pub struct EnvConfig {
    pub dir_views: PathBuf,
    pub template_reload: bool,
}

lazy_static! {
    static ref ENV_CONFIG: EnvConfig = load_env_config();
}

pub fn get_env_config() -> &'static EnvConfig {
    &ENV_CONFIG
}

fn load_env_config() -> EnvConfig {
    let dir_views = env::var("DIR_VIEWS").unwrap_or_else(|_| "public/views".to_string());

    // Template reload defaults to on for debug builds only.
    let template_reload = match env::var("TEMPLATE_RELOAD") {
        Ok(value) => value == "1" || value == "true",
        Err(_) => cfg!(debug_assertions),
    };

    EnvConfig {
        dir_views: PathBuf::from(dir_views),
        template_reload,
    }
}
