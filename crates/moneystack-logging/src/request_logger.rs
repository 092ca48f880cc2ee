use colored::Colorize;

use crate::safe_truncate;

const MAX_BODY_CHARS: usize = 5000;

/// First 10 characters of a key followed by `***`
pub fn redact_key(api_key: &str) -> String {
    format!("{}***", api_key.chars().take(10).collect::<String>())
}

/// Header line as sent, with the key redacted; `Authorization` carries the bearer scheme
pub fn auth_header_line(header: &str, api_key: &str) -> String {
    if header.eq_ignore_ascii_case("authorization") {
        format!("{}: Bearer {}", header, redact_key(api_key))
    } else {
        format!("{}: {}", header, redact_key(api_key))
    }
}

fn print_body(body: &str) {
    let pretty = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or_else(|| body.to_string());

    if pretty.chars().count() > MAX_BODY_CHARS {
        println!("{}", safe_truncate(&pretty, MAX_BODY_CHARS));
        println!("\n{}", format!("... (truncated, total {} bytes)", pretty.len()).bright_black());
    } else {
        println!("{}", pretty);
    }
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(
    method: &str,
    url: &str,
    body: Option<&serde_json::Value>,
    auth_header: &str,
    api_key: &str,
    verbose: bool,
) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    println!("{}: {} {}", "Request".bright_yellow(), method, url);
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("  {}", auth_header_line(auth_header, api_key));

    if let Some(body) = body {
        println!("\n{}", "Request Body:".bright_yellow());
        print_body(&body.to_string());
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!(
        "{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Response Body:".bright_yellow());
    print_body(body);

    println!("{}", "═".repeat(80).bright_green());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_key() {
        assert_eq!(redact_key("sk-ant-0123456789abcdef"), "sk-ant-012***");
        assert_eq!(redact_key("short"), "short***");
    }

    #[test]
    fn test_auth_header_line_uses_callers_header() {
        assert_eq!(
            auth_header_line("x-api-key", "sk-ant-0123456789abcdef"),
            "x-api-key: sk-ant-012***"
        );
        assert_eq!(
            auth_header_line("Authorization", "pf_live_0123456789"),
            "Authorization: Bearer pf_live_01***"
        );
    }
}
