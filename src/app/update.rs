use tracing::debug;

use crate::app::{AppState, Command, Flow};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::{AddOutcome, RemoveOutcome, User};
use crate::ui::{self, Variant};

/// Run the command loop until the operator quits.
///
/// An explicit `while`-style loop rather than re-invoking a handler: one
/// blocking prompt at a time, and every effect of a command is rendered
/// before the next command prompt appears.
pub fn run_app(prompter: &mut dyn Prompter, app: &mut AppState) -> Result<()> {
    loop {
        let token = prompter.read_command()?;
        if handle_command(prompter, app, &token)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Dispatch a single command token: collect any additional fields via the
/// prompter, apply the store operation, and render the outcome.
pub fn handle_command(
    prompter: &mut dyn Prompter,
    app: &mut AppState,
    token: &str,
) -> Result<Flow> {
    match Command::parse(token) {
        Some(Command::List) => {
            if app.store.is_empty() {
                ui::report(Variant::Info, "No data...");
            } else {
                ui::report(Variant::Info, "Users data");
                println!("{}", ui::table::users_table(app.store.list()));
            }
        }
        Some(Command::Add) => {
            let name = prompter.read_text("Enter name", None)?;
            let age = prompter.read_number("Enter age", None)?;
            add_user(app, User { name, age });
        }
        Some(Command::Edit) => {
            let target = prompter.read_text("Enter name of the user you want to edit", None)?;
            match app.store.find(&target).cloned() {
                Some(current) => {
                    let name = prompter.read_text("Enter new name", Some(&current.name))?;
                    let age = prompter.read_number("Enter new age", Some(current.age))?;
                    // Delete-then-insert: the edited record always moves to
                    // the end, and if the replacement fails validation the
                    // original is already gone.
                    remove_user(app, &target);
                    add_user(app, User { name, age });
                }
                None => ui::report(Variant::Error, "User not found"),
            }
        }
        Some(Command::Remove) => {
            let name = prompter.read_text("Enter name", None)?;
            remove_user(app, &name);
        }
        Some(Command::Quit) => {
            ui::report(Variant::Info, "Bye bye!");
            return Ok(Flow::Quit);
        }
        None => {
            debug!(token, "unknown command");
            ui::report(Variant::Error, "Command not found!");
        }
    }
    Ok(Flow::Continue)
}

fn add_user(app: &mut AppState, candidate: User) {
    debug!(name = %candidate.name, age = candidate.age, "add user");
    match app.store.add(candidate) {
        AddOutcome::Added => ui::report(Variant::Success, "User has been successfully added!"),
        AddOutcome::Rejected => ui::report(Variant::Error, "Wrong data!"),
    }
}

fn remove_user(app: &mut AppState, name: &str) {
    debug!(name, "remove user");
    match app.store.remove(name) {
        RemoveOutcome::Removed => ui::report(Variant::Success, "User deleted"),
        RemoveOutcome::NotFound => ui::report(Variant::Error, "User not found"),
    }
}
