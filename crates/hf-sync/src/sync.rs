use crate::client::GitHubClient;
use crate::error::SyncError;
use crate::types::Role;
use chrono::{NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

pub const CONTEXT_PATH: &str = ".claude/CONTEXT.md";
pub const SESSION_LOG_DIR: &str = ".sessions/logs";
pub const PROJECTS_DIR: &str = ".claude/projects";

static SESSION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// The four context operations, bound to one repository.
pub struct ContextSync {
    client: GitHubClient,
}

impl ContextSync {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    pub async fn context_pull(&self) -> Result<String, SyncError> {
        Ok(self.client.get_file(CONTEXT_PATH).await?.content)
    }

    /// Replace the context file; `message` is wrapped in the sync commit
    /// convention.
    pub async fn context_push(&self, content: &str, message: &str) -> Result<(), SyncError> {
        let sha = match self.client.get_file(CONTEXT_PATH).await {
            Ok(current) => Some(current.sha),
            Err(SyncError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let commit = format!("chore(context): {message} [SYNC]");
        self.client
            .put_file(CONTEXT_PATH, content, &commit, sha.as_deref())
            .await?;
        tracing::info!("Pushed {} ({})", CONTEXT_PATH, commit);
        Ok(())
    }

    /// Write a new session log dated today (UTC). Returns the file path.
    pub async fn session_log(&self, session_id: &str, content: &str) -> Result<String, SyncError> {
        self.session_log_on(Utc::now().date_naive(), session_id, content)
            .await
    }

    pub async fn session_log_on(
        &self,
        date: NaiveDate,
        session_id: &str,
        content: &str,
    ) -> Result<String, SyncError> {
        let path = session_log_path(date, session_id)?;
        let commit = format!("docs(session): add {} {} log [SYNC]", date.format("%Y-%m-%d"), session_id);
        self.client.put_file(&path, content, &commit, None).await?;
        tracing::info!("Created session log {}", path);
        Ok(path)
    }

    pub async fn project_config(&self, role: Role) -> Result<String, SyncError> {
        let path = format!("{PROJECTS_DIR}/{role}.md");
        match self.client.get_file(&path).await {
            Ok(file) => Ok(file.content),
            Err(SyncError::NotFound(_)) => Err(SyncError::NotFound(format!("{role}.md"))),
            Err(e) => Err(e),
        }
    }
}

pub fn session_log_path(date: NaiveDate, session_id: &str) -> Result<String, SyncError> {
    if !SESSION_ID.is_match(session_id) {
        return Err(SyncError::InvalidSessionId(session_id.to_string()));
    }
    Ok(format!(
        "{SESSION_LOG_DIR}/{}-{session_id}.md",
        date.format("%Y-%m-%d")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_log_path() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            session_log_path(date, "abc_123-x").unwrap(),
            ".sessions/logs/2025-03-07-abc_123-x.md"
        );
    }

    #[test]
    fn test_session_id_cannot_escape_log_dir() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        for bad in ["../secrets", "a/b", "", "id with space"] {
            assert!(matches!(
                session_log_path(date, bad),
                Err(SyncError::InvalidSessionId(_))
            ));
        }
    }
}
