//! Console output: one colored line per processed video.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::app_controller::{RunReport, SubtitleResult};
use crate::file_utils::file_name_lossy;

pub const SUCCESS_SYMBOL: &str = "✔";
pub const ERROR_SYMBOL: &str = "✖";

/// Colors are used only on a terminal, and never when `NO_COLOR` is set
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Format one result line, e.g. `✔ Movie.mkv [FULL,SDH]` or `✖ Movie.mkv [reason]`
pub fn format_result(result: &SubtitleResult, use_color: bool) -> String {
    let (head, detail, ok) = match result {
        SubtitleResult::Ok { video, subtitles } => {
            let kinds: Vec<String> = subtitles.kinds().map(|kind| kind.as_str().to_uppercase()).collect();
            (
                format!("{} {}", SUCCESS_SYMBOL, file_name_lossy(video)),
                format!("[{}]", kinds.join(",")),
                true,
            )
        }
        SubtitleResult::Error { video, error } => (
            format!("{} {}", ERROR_SYMBOL, file_name_lossy(video)),
            format!("[{}]", error),
            false,
        ),
    };

    if !use_color {
        return format!("{} {}", head, detail);
    }

    if ok {
        format!("{} {}", head.green(), detail.bright_black())
    } else {
        format!("{} {}", head.red(), detail.bright_black())
    }
}

/// Format the single line printed when the whole run is aborted
pub fn format_abort(message: &str, use_color: bool) -> String {
    if use_color {
        message.red().to_string()
    } else {
        message.to_string()
    }
}

/// Print every result of a completed run to stdout, in video order
pub fn print_report(report: &RunReport) {
    let use_color = should_use_color();
    for result in &report.results {
        println!("{}", format_result(result, use_color));
    }
}

/// Print the error that aborted the run
pub fn print_abort(message: &str) {
    println!("{}", format_abort(message, should_use_color()));
}
