use std::env;

/// Where the finished roster gets POSTed.
#[derive(Clone, Debug)]
pub struct SubmissionConfig {
    pub base_url: String,
}

impl SubmissionConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("COMPANION_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self { base_url }
    }

    /// The `/data` endpoint on the companion service.
    pub fn data_endpoint(&self) -> String {
        format!("{}/data", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_endpoint_handles_trailing_slash() {
        let config = SubmissionConfig {
            base_url: "http://localhost:8080/".to_string(),
        };
        assert_eq!(config.data_endpoint(), "http://localhost:8080/data");
    }
}
