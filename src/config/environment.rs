use std::env;

/// Environment configuration
/// Loads and validates environment variables
pub struct Config {
    pub jwt_secret: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set".to_string())?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:2000".to_string());

        Ok(Self {
            jwt_secret,
            bind_addr,
        })
    }
}
