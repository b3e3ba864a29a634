use owo_colors::OwoColorize;
use std::fmt::Write as _;

use crate::organizer::RunSummary;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

const RULE: &str = "--------------------------------------------------";

/// Plain-text summary block. Not a stable format; meant for humans.
pub fn render_summary(s: &RunSummary, dry_run: bool) -> String {
    let mut out = String::new();
    let title = if dry_run {
        "Execution Summary (dry run)"
    } else {
        "Execution Summary"
    };
    let moved_label = if dry_run { "Would move:" } else { "Files moved:" };
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<15}{:?}", "Duration:", s.duration);
    let _ = writeln!(out, "{:<15}{}", moved_label, s.moved);
    let _ = writeln!(out, "{:<15}{}", "Skipped:", s.skipped);
    let _ = writeln!(out, "{:<15}{}", "Failed:", s.failed);
    let _ = writeln!(out, "{:<15}{:.2} MB", "Total size:", s.total_mb());
    if s.interrupted {
        let _ = writeln!(out, "{:<15}yes", "Interrupted:");
    }
    let _ = write!(out, "{RULE}");
    out
}

pub fn print_summary(s: &RunSummary, dry_run: bool) {
    let block = render_summary(s, dry_run);
    if is_tty() {
        let mut lines = block.lines();
        if let Some(title) = lines.next() {
            println!("\n{}", title.bold());
        }
        for line in lines {
            if line.starts_with("Failed:") && s.failed > 0 {
                println!("{}", line.red());
            } else {
                println!("{}", line);
            }
        }
    } else {
        println!("\n{}", block);
    }
}
