use anyhow::Result;
use colored::Colorize;
use moneystack_agent::{AgentOutcome, AgentRun};
use moneystack_logging::{get_logs_dir, ConversationLogger};

use crate::app::setup::build_agent;
use crate::cli::AgentArgs;
use crate::config::ClientConfig;

/// Run one agent task to completion and print how it ended
pub async fn run_task_mode(args: &AgentArgs, client_config: &ClientConfig) -> Result<()> {
    println!("{}", "🤖 moneystack - Task Mode".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "Model: {} | Max turns: {} | Referral: {}",
            args.model, args.max_turns, client_config.referral_code
        )
        .bright_black()
    );
    println!("{}", format!("Task: {}", args.task).bright_yellow());
    println!();

    let mut agent = build_agent(args, client_config)?;

    if !args.no_log {
        let logger = match get_logs_dir() {
            Ok(dir) => ConversationLogger::new(&dir).await,
            Err(e) => Err(e),
        };
        match logger {
            Ok(logger) => {
                println!("{}", format!("Logging to {}", logger.file_path().display()).bright_black());
                agent = agent.with_logger(logger);
            }
            Err(e) => eprintln!("Task logging disabled: {}", e),
        }
    }

    let cancel = agent.cancellation_token();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n{}", "Cancelling after the current step...".yellow());
            cancel.cancel();
        }
    });

    let result = agent.run(&args.task).await;
    ctrl_c.abort();

    match result {
        Ok(run) => {
            print_outcome(&run);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {:#}\n", "Error:".bright_red().bold(), e);
            Err(e)
        }
    }
}

fn print_outcome(run: &AgentRun) {
    println!();
    match &run.outcome {
        AgentOutcome::Completed { final_text, turns } => {
            println!("{} {}", "✅ Done".green().bold(), format!("({} turns)", turns).bright_black());
            if !final_text.is_empty() {
                println!("{}", final_text);
            }
        }
        AgentOutcome::Incomplete { reason, turns } => {
            println!(
                "{} {} {}",
                "⚠️  Stopped:".yellow().bold(),
                reason,
                format!("({} turns)", turns).bright_black()
            );
            if let Some(text) = run.transcript.last_assistant_text() {
                println!("{}", text);
            }
        }
    }
}
