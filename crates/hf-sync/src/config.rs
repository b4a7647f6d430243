use crate::error::SyncError;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub owner: String,
    pub repo: String,
    pub token: String,
    pub api_url: String,
}

impl SyncConfig {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Read `GITHUB_TOKEN`, `GITHUB_OWNER`, `GITHUB_REPO` and the optional
    /// `GITHUB_API_URL`.
    pub fn from_env() -> Result<Self, SyncError> {
        let token = required("GITHUB_TOKEN")?;
        let owner = required("GITHUB_OWNER")?;
        let repo = required("GITHUB_REPO")?;

        let mut config = Self::new(owner, repo, token);
        if let Ok(url) = env::var("GITHUB_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url.trim_end_matches('/').to_string();
            }
        }
        Ok(config)
    }

    /// Contents API URL for a repository path.
    pub fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, self.owner, self.repo, path
        )
    }
}

fn required(name: &'static str) -> Result<String, SyncError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(SyncError::MissingConfig(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_url() {
        let config = SyncConfig::new("acme", "storefront", "ghp_x");
        assert_eq!(
            config.contents_url(".claude/CONTEXT.md"),
            "https://api.github.com/repos/acme/storefront/contents/.claude/CONTEXT.md"
        );
    }
}
