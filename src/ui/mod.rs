//! Console output: categorized status lines, banner text, and the users table.

pub mod table;

use colored::Colorize;

/// Display category of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Success,
    Error,
    Info,
}

/// Build the colorized status line for a variant. Split out from [`report`]
/// so tests can assert on the rendered text.
pub fn format_status(variant: Variant, text: &str) -> String {
    match variant {
        Variant::Success => format!("{} {}", "✔".green().bold(), text.green()),
        Variant::Error => format!("{} {}", "✖".red().bold(), text.red()),
        Variant::Info => format!("{} {}", "ℹ".cyan().bold(), text),
    }
}

/// Print a categorized status line. Errors go to stderr, everything else to
/// stdout. Never fails.
pub fn report(variant: Variant, text: &str) {
    let line = format_status(variant, text);
    match variant {
        Variant::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

/// Startup banner and the actions menu.
pub fn print_banner() {
    println!();
    println!("Welcome to the UsersApp!");
    println!("====================================");
    report(Variant::Info, "Available actions");
    println!();
    println!("list – show all users");
    println!("add – add new user to the list");
    println!("edit – edit user from the list");
    println!("remove – remove user from the list");
    println!("quit – quit the app");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_carry_symbol_and_text() {
        let s = format_status(Variant::Success, "User has been successfully added!");
        assert!(s.contains('✔'));
        assert!(s.contains("User has been successfully added!"));

        let e = format_status(Variant::Error, "Wrong data!");
        assert!(e.contains('✖'));
        assert!(e.contains("Wrong data!"));

        let i = format_status(Variant::Info, "No data...");
        assert!(i.contains('ℹ'));
        assert!(i.contains("No data..."));
    }
}
