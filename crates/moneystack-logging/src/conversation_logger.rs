use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use moneystack_models::ToolCall;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct ToolCallInfo {
    id: String,
    name: String,
    input: serde_json::Value,
}

#[derive(Serialize)]
struct LogEntry {
    timestamp: String, // ISO-8601 UTC
    session_id: String,
    role: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ToolCallInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_error: Option<bool>,
}

impl LogEntry {
    fn new(session_id: &str, role: &str, content: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            session_id: session_id.to_string(),
            role: role.to_string(),
            content: content.to_string(),
            model: None,
            tool_calls: None,
            tool_call_id: None,
            name: None,
            is_error: None,
        }
    }
}

/// Append-only JSONL log of one agent conversation
pub struct ConversationLogger {
    file_path: PathBuf,
    session_id: String,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger in `logs_dir`; the file name is derived from the current UTC time.
    pub async fn new(logs_dir: &Path) -> Result<Self> {
        fs::create_dir_all(logs_dir)
            .await
            .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

        let session_id = uuid::Uuid::new_v4().to_string();
        let now: DateTime<Utc> = Utc::now();
        let filename = format!(
            "moneystack-{}-{}.jsonl",
            now.format("%Y-%m-%d-%H%M%S"),
            &session_id[..8]
        );
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await
            .with_context(|| format!("Failed to open conversation log {}", file_path.display()))?;

        Ok(Self {
            file_path,
            session_id,
            file: Some(file),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Append a plain message entry.
    pub async fn log(&mut self, role: &str, content: &str, model: Option<&str>) {
        let mut entry = LogEntry::new(&self.session_id, role, content);
        entry.model = model.map(|s| s.to_string());
        self.write_entry(&entry).await;
    }

    /// Log an assistant message with tool calls
    pub async fn log_with_tool_calls(
        &mut self,
        content: &str,
        model: Option<&str>,
        tool_calls: &[ToolCall],
    ) {
        let mut entry = LogEntry::new(&self.session_id, "assistant", content);
        entry.model = model.map(|s| s.to_string());
        entry.tool_calls = Some(
            tool_calls
                .iter()
                .map(|call| ToolCallInfo {
                    id: call.id.clone(),
                    name: call.name.clone(),
                    input: call.input.clone(),
                })
                .collect(),
        );
        self.write_entry(&entry).await;
    }

    /// Log a tool result
    pub async fn log_tool_result(&mut self, content: &str, tool_call_id: &str, tool_name: &str, is_error: bool) {
        let mut entry = LogEntry::new(&self.session_id, "tool", content);
        entry.tool_call_id = Some(tool_call_id.to_string());
        entry.name = Some(tool_name.to_string());
        entry.is_error = if is_error { Some(true) } else { None };
        self.write_entry(&entry).await;
    }

    async fn write_entry(&mut self, entry: &LogEntry) {
        let Some(file) = &mut self.file else {
            return;
        };
        match serde_json::to_string(entry) {
            Ok(mut json) => {
                json.push('\n');
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                }
            }
            Err(e) => eprintln!("[Logging error] {}", e),
        }
    }

    /// Flush and close the log. Later writes are dropped.
    pub async fn shutdown(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush().await;
            let _ = file.sync_all().await;
        }
    }
}
