use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments available for the dashboard.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Production environment serving real dashboard data.
    #[default]
    Production,
    /// Custom environment with a user-supplied API base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the dashboard API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:4000/api".to_string(),
            Environment::Production => "https://api.predulive.com/api".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}
