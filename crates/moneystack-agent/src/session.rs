use anyhow::{Context, Result};
use colored::Colorize;
use moneystack_llm_api::LlmClient;
use moneystack_logging::{safe_truncate, ConversationLogger};
use moneystack_models::{ChatRequest, ContentBlock, LlmResponse, Message};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::AgentConfig;
use crate::executor::ToolExecutor;
use crate::transcript::Transcript;

/// Longest tool argument string echoed to the console
const MAX_ARGS_DISPLAY: usize = 200;

/// Where the loop is between model calls
#[derive(Debug)]
enum LoopState {
    AwaitingModel,
    AwaitingToolResults(LlmResponse),
}

/// Why a run stopped before the model finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteReason {
    MaxTurns(usize),
    Cancelled,
}

impl fmt::Display for IncompleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncompleteReason::MaxTurns(limit) => write!(f, "reached the limit of {} model turns", limit),
            IncompleteReason::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    Completed { final_text: String, turns: usize },
    Incomplete { reason: IncompleteReason, turns: usize },
}

impl AgentOutcome {
    pub fn turns(&self) -> usize {
        match self {
            AgentOutcome::Completed { turns, .. } | AgentOutcome::Incomplete { turns, .. } => *turns,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, AgentOutcome::Completed { .. })
    }
}

/// Result of one run: how it ended plus everything that was said
#[derive(Debug, Clone)]
pub struct AgentRun {
    pub outcome: AgentOutcome,
    pub transcript: Transcript,
}

/// Turn-taking loop between the model and the tools
pub struct AgentLoop {
    llm: Arc<dyn LlmClient>,
    tools: Arc<dyn ToolExecutor>,
    config: AgentConfig,
    logger: Option<ConversationLogger>,
    cancel: CancellationToken,
    quiet: bool,
}

impl AgentLoop {
    pub fn new(llm: Arc<dyn LlmClient>, tools: Arc<dyn ToolExecutor>, config: AgentConfig) -> Self {
        Self {
            llm,
            tools,
            config,
            logger: None,
            cancel: CancellationToken::new(),
            quiet: false,
        }
    }

    pub fn with_logger(mut self, logger: ConversationLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Suppress console output
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Drive the conversation for `task` until the model stops, the turn
    /// limit is hit or the run is cancelled.
    ///
    /// Tool failures never end the run. A failed model call does, and is
    /// returned as an error.
    pub async fn run(&mut self, task: &str) -> Result<AgentRun> {
        let mut transcript = Transcript::new(task);
        if let Some(logger) = &mut self.logger {
            logger.log("user", task, None).await;
        }

        let definitions = self.tools.definitions();
        let mut turns = 0usize;
        let mut state = LoopState::AwaitingModel;

        let outcome = 'turns: loop {
            state = match state {
                LoopState::AwaitingModel => {
                    if self.cancel.is_cancelled() {
                        break 'turns self.incomplete(IncompleteReason::Cancelled, turns);
                    }
                    if turns >= self.config.max_turns {
                        break 'turns self.incomplete(IncompleteReason::MaxTurns(self.config.max_turns), turns);
                    }

                    let request = ChatRequest {
                        model: self.config.model.clone(),
                        max_tokens: self.config.max_tokens,
                        system: Some(self.config.system_prompt.clone()),
                        messages: transcript.messages().to_vec(),
                        tools: definitions.clone(),
                    };

                    let response = tokio::select! {
                        _ = self.cancel.cancelled() => {
                            break 'turns self.incomplete(IncompleteReason::Cancelled, turns);
                        }
                        response = self.llm.chat(request) => response,
                    };
                    turns += 1;
                    let response = response.with_context(|| format!("Model call {} failed", turns))?;

                    self.report_text(&response).await;

                    if response.wants_tools() {
                        LoopState::AwaitingToolResults(response)
                    } else {
                        let message = response.into_message();
                        let final_text = message.text();
                        transcript.push(message);
                        break 'turns AgentOutcome::Completed { final_text, turns };
                    }
                }
                LoopState::AwaitingToolResults(response) => {
                    let calls = response.tool_calls();
                    let text = response.into_message();
                    if let Some(logger) = &mut self.logger {
                        logger
                            .log_with_tool_calls(&text.text(), Some(self.config.model.as_str()), &calls)
                            .await;
                    }
                    transcript.push(text);

                    let mut results = Vec::with_capacity(calls.len());
                    let mut cancelled = false;
                    for call in &calls {
                        if cancelled || self.cancel.is_cancelled() {
                            cancelled = true;
                            results.push(ContentBlock::tool_result(&call.id, "Error: cancelled before execution", true));
                            continue;
                        }

                        if !self.quiet {
                            println!(
                                "{} {} with args: {} (turn {}/{})",
                                "🔧 Calling tool:".yellow(),
                                call.name.cyan(),
                                safe_truncate(&call.input.to_string(), MAX_ARGS_DISPLAY).bright_black(),
                                turns,
                                self.config.max_turns
                            );
                        }

                        let result = self.tools.call_tool(call).await;
                        let output = result.output().to_string();

                        if !self.quiet {
                            let label = if result.success { "📋 Result:".green() } else { "📋 Result:".red() };
                            println!("{} {}", label, output.bright_black());
                        }
                        if let Some(logger) = &mut self.logger {
                            logger.log_tool_result(&output, &call.id, &call.name, !result.success).await;
                        }

                        results.push(ContentBlock::tool_result(&call.id, output, !result.success));
                    }
                    transcript.push(Message::tool_results(results));

                    if cancelled {
                        break 'turns self.incomplete(IncompleteReason::Cancelled, turns);
                    }
                    LoopState::AwaitingModel
                }
            };
        };

        if let Some(logger) = &mut self.logger {
            if let AgentOutcome::Incomplete { reason, .. } = &outcome {
                logger.log("system", &format!("Run incomplete: {}", reason), None).await;
            }
            logger.shutdown().await;
        }

        Ok(AgentRun { outcome, transcript })
    }

    async fn report_text(&mut self, response: &LlmResponse) {
        let text = Message::assistant(response.content.clone()).text();
        if text.is_empty() {
            return;
        }
        if !self.quiet {
            println!("{} {}", "Agent:".bright_green().bold(), text);
        }
        // Tool-use turns are logged together with their calls
        if !response.wants_tools() {
            if let Some(logger) = &mut self.logger {
                logger.log("assistant", &text, Some(self.config.model.as_str())).await;
            }
        }
    }

    fn incomplete(&self, reason: IncompleteReason, turns: usize) -> AgentOutcome {
        if !self.quiet {
            eprintln!("{} Run incomplete: {}", "⚠️".yellow(), reason);
        }
        AgentOutcome::Incomplete { reason, turns }
    }
}
