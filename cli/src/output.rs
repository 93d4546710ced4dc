use colored::*;
use moodshop_ui::{ElementId, Page};

/// Print a container's markup to stdout under its element id
pub fn print_container(page: &Page, id: ElementId) {
    if page.is_hidden(id) {
        return;
    }
    let html = page.html(id);
    if html.is_empty() {
        return;
    }
    println!("{}", format!("[{}]", id).cyan().bold());
    println!("{}", html.trim());
    println!();
}

/// Alerts go to stderr so stdout stays pure markup
pub fn print_alerts(alerts: &[String]) {
    for alert in alerts {
        eprintln!("{} {}", "!".yellow().bold(), alert.yellow());
    }
}

pub fn print_identity(user_id: &str) {
    println!("{}: {}", "User".green().bold(), user_id);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Show usage instructions when no command or mode is given
pub fn print_usage_instructions() {
    println!("{}", "Usage:".yellow().bold());
    println!("  {}", "moodshop mood \"how you feel\"".green().bold());
    println!("    Analyze your mood and show recommendations");
    println!();
    println!("  {}", "moodshop search <QUERY> [--emotion <EMOTION>]".green().bold());
    println!("    Search the catalog");
    println!();
    println!("  {}", "moodshop catalog | view <ID> | like <ID> | cart <ID>".green().bold());
    println!("    Browse and act on products");
    println!();
    println!("  {}", "moodshop -i".green().bold());
    println!("    Enter commands line by line in one session");
    println!();
    println!("{}", "Options:".cyan());
    println!("  --api-url <URL>     Backend base URL");
    println!("  --storage <FILE>    File holding the persisted user id");
    println!("  --page-out <FILE>   Write a page snapshot after each command");
    println!("  --help              Show this help message");
    println!();
}
