#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/upload".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_local_upload_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/upload");
    }
}
