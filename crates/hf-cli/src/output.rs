//! Status lines printed by every command.

use colored::Colorize;

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

pub fn step(current: usize, total: usize, message: &str) {
    println!("{} {}", format!("[{current}/{total}]").dimmed(), message);
}

pub fn banner(title: &str, subtitle: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", subtitle.dimmed());
    println!();
}
