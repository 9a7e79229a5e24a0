pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const CONFIG_DIR_ENV_VAR: &str = "SIGNOFF_CONFIG_DIR";
    pub const ENV_PREFIX: &str = "SIGNOFF";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod defaults {
    pub const APP_ENVIRONMENT: &str = "local";
    pub const CONFIG_DIR: &str = "config";
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
    pub const SCHEME: &str = "http";
    pub const HOST: &str = "localhost";
    pub const ASSETS_DIR: &str = "assets";
    pub const BUNDLED_RESOURCES_DIR: &str = "resources";
    pub const JWT_COOKIE_NAME: &str = "jwt";
    pub const SESSION_COOKIE_NAME: &str = "SESSION";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret";
}
