use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(name = "expense-tracker", about = "Personal expense tracking API")]
pub struct ApiConfig {
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[clap(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
    /// When set, every route except `/` and `/health` needs `Authorization: Bearer <key>`.
    #[clap(long = "api-secret-key", env = "API_SECRET_KEY")]
    pub secret_key: Option<String>,
}

impl ApiConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
