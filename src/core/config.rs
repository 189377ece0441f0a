use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

/// Endpoints of the two remote services the client talks to
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalog service (`/api/trash`, `/api/addTrash`, ...)
    pub catalog_url: String,
    /// Base URL of the image store (`/uploadImage`)
    pub image_store_url: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_BASE_URL: &'static str = "https://www.racooni.com";
    const DEFAULT_USER_AGENT: &'static str = "Racooni/0.1 (litter-report-client)";

    pub fn from_env() -> Result<Self, String> {
        let catalog_url = env::var("RACOONI_CATALOG_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        // The image store is served from the catalog host unless pointed elsewhere
        let image_store_url =
            env::var("RACOONI_IMAGE_STORE_URL").unwrap_or_else(|_| catalog_url.clone());

        let user_agent = env::var("RACOONI_USER_AGENT")
            .unwrap_or_else(|_| Self::DEFAULT_USER_AGENT.to_string());

        Self::new(catalog_url, image_store_url, user_agent)
    }

    pub fn new(
        catalog_url: impl Into<String>,
        image_store_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self, String> {
        let catalog_url = normalize_base_url("RACOONI_CATALOG_URL", catalog_url.into())?;
        let image_store_url =
            normalize_base_url("RACOONI_IMAGE_STORE_URL", image_store_url.into())?;

        Ok(Self {
            catalog_url,
            image_store_url,
            user_agent: user_agent.into(),
        })
    }

    /// Build a full catalog URL for the given path (e.g. `/api/trash`)
    pub fn catalog_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.catalog_url, path)
    }

    /// Build a full image store URL for the given path (e.g. `/uploadImage`)
    pub fn image_store_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.image_store_url, path)
    }
}

/// Trim trailing slashes and reject anything that is not an http(s) URL
fn normalize_base_url(name: &str, value: String) -> Result<String, String> {
    let trimmed = value.trim().trim_end_matches('/').to_string();

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(format!("{} must be an http(s) URL, got '{}'", name, value));
    }

    Ok(trimmed)
}
