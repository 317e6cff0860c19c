use std::fmt;

/// ANSI colors
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_CYAN: &str = "\x1b[36m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}i{} {}", FG_BLUE, BOLD, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}✔{} {}", FG_GREEN, BOLD, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}!{} {}", FG_YELLOW, BOLD, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}✘{} {}", FG_RED, BOLD, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", FG_CYAN, BOLD, msg, RESET);
}
