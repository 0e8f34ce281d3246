//! Terminal input collection for the interactive loop.
//!
//! Generic over the input/output streams so the validation flow can be
//! exercised against in-memory buffers. An exhausted input stream is
//! treated the same as an explicit quit, never retried.

use std::io::{self, BufRead, Write};

use crate::services::prompt::RecommendationRequest;

/// Read one trimmed line, or None when the stream is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    read_line(input)
}

/// Collect and validate one request from the terminal.
/// Returns None when the user quits or the input stream ends.
pub fn read_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<RecommendationRequest>> {
    loop {
        writeln!(output, "\n📊 INVESTMENT PARAMETERS")?;
        writeln!(output, "{}", "-".repeat(30))?;

        let Some(ticker) = prompt(
            input,
            output,
            "Enter stock ticker (e.g., NVDA, AAPL, MSFT) or 'q' to quit: ",
        )?
        else {
            return Ok(None);
        };
        let ticker = ticker.to_uppercase();
        if ticker.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if ticker.is_empty() {
            writeln!(output, "⚠️ Please enter a valid stock ticker")?;
            continue;
        }

        let Some(capital_raw) = prompt(input, output, "Enter available capital ($): $")? else {
            return Ok(None);
        };
        let capital: f64 = match capital_raw.replace(['$', ','], "").parse() {
            Ok(v) => v,
            Err(_) => {
                writeln!(output, "⚠️ Please enter valid numbers")?;
                continue;
            }
        };
        if capital <= 0.0 {
            writeln!(output, "⚠️ Capital must be positive")?;
            continue;
        }

        let Some(loss_raw) = prompt(input, output, "Enter maximum loss tolerance (%): ")? else {
            return Ok(None);
        };
        let max_loss_pct: f64 = match loss_raw.replace('%', "").parse() {
            Ok(v) => v,
            Err(_) => {
                writeln!(output, "⚠️ Please enter valid numbers")?;
                continue;
            }
        };
        if max_loss_pct <= 0.0 || max_loss_pct > 100.0 {
            writeln!(output, "⚠️ Loss tolerance must be between 0-100%")?;
            continue;
        }

        let Some(mut time_horizon) = prompt(
            input,
            output,
            "Enter time horizon (e.g., '1 week', '1 month', '3 months'): ",
        )?
        else {
            return Ok(None);
        };
        if time_horizon.is_empty() {
            time_horizon = "1 month".to_string();
        }

        return Ok(Some(RecommendationRequest {
            ticker,
            time_horizon,
            capital,
            max_loss_pct,
        }));
    }
}

/// Ask whether to run another request. Input ending counts as no.
pub fn confirm_continue<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let answer = prompt(
        input,
        output,
        "\n🔄 Would you like another recommendation? (y/n): ",
    )?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("y") | Some("yes")
    ))
}
