//! Command table for the REPL
//!
//! Maps the first word of an input line to the action it runs. Matching is
//! exact and case-sensitive.

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Command word (what the user types)
    pub name: &'static str,
    /// Argument synopsis
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Hello,
    AddContact,
    ChangeContact,
    ShowPhone,
    ShowAll,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        usage: "",
        description: "Greet the assistant",
        action: CommandAction::Hello,
    },
    Command {
        name: "add",
        usage: "<name> [phone]",
        description: "Add a contact, or add a phone to an existing one",
        action: CommandAction::AddContact,
    },
    Command {
        name: "change",
        usage: "<name> <new_phone>",
        description: "Replace the contact's first phone",
        action: CommandAction::ChangeContact,
    },
    Command {
        name: "phone",
        usage: "<name>",
        description: "Show the contact's phones",
        action: CommandAction::ShowPhone,
    },
    Command {
        name: "all",
        usage: "",
        description: "Show every contact",
        action: CommandAction::ShowAll,
    },
    Command {
        name: "add-birthday",
        usage: "<name> <DD.MM.YYYY>",
        description: "Set the contact's birthday",
        action: CommandAction::AddBirthday,
    },
    Command {
        name: "show-birthday",
        usage: "<name>",
        description: "Show the contact's birthday",
        action: CommandAction::ShowBirthday,
    },
    Command {
        name: "birthdays",
        usage: "",
        description: "List birthdays coming up soon",
        action: CommandAction::Birthdays,
    },
    Command {
        name: "close",
        usage: "",
        description: "Quit",
        action: CommandAction::Exit,
    },
    Command {
        name: "exit",
        usage: "",
        description: "Quit",
        action: CommandAction::Exit,
    },
];

/// Look up a command by its exact name
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Help text listing every command, one per line
pub fn commands_help() -> String {
    let width = COMMANDS
        .iter()
        .map(|c| c.name.len() + c.usage.len() + 1)
        .max()
        .unwrap_or(0);

    let mut help = String::from("Commands:\n");
    for command in COMMANDS {
        let synopsis = format!("{} {}", command.name, command.usage);
        help.push_str(&format!(
            "  {:<width$}  {}\n",
            synopsis.trim_end(),
            command.description,
            width = width
        ));
    }
    help
}
