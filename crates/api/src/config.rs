/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port. `APP_ENV=test` switches the default from 3000 to 3001.
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var   | Default                                 |
    /// |-----------|-----------------------------------------|
    /// | `HOST`    | `0.0.0.0`                               |
    /// | `APP_ENV` | unset                                   |
    /// | `PORT`    | `3001` when `APP_ENV=test`, else `3000` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let default_port = match std::env::var("APP_ENV").as_deref() {
            Ok("test") => "3001",
            _ => "3000",
        };

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| default_port.into())
            .parse()
            .expect("PORT must be a valid u16");

        Self { host, port }
    }
}
