//! Parsing of REPL input lines into commands.

use super::CommandError;

pub const USAGE_ADD: &str = "add <name> [phone]";
pub const USAGE_CHANGE: &str = "change <name> [old phone] <new phone>";
pub const USAGE_PHONE: &str = "phone <name>";
pub const USAGE_REMOVE_PHONE: &str = "remove-phone <name> <phone>";
pub const USAGE_DELETE: &str = "delete <name>";
pub const USAGE_ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const USAGE_SHOW_BIRTHDAY: &str = "show-birthday <name>";
pub const USAGE_BIRTHDAYS: &str = "birthdays [days]";

/// A parsed command with its raw, not yet validated, arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: Option<String> },
    Change { name: String, old: Option<String>, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays { days: Option<u32> },
    Help,
    Exit,
}

impl Command {
    /// Whether running this command can change the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Change { .. }
                | Command::RemovePhone { .. }
                | Command::Delete { .. }
                | Command::AddBirthday { .. }
        )
    }
}

/// Split a line into a lower-cased keyword and whitespace-separated
/// arguments, and check the argument count.
pub fn parse_input(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next().ok_or(CommandError::Empty)?.to_lowercase();
    let args: Vec<String> = parts.map(str::to_string).collect();

    let command = match keyword.as_str() {
        "hello" => no_args(args, Command::Hello, "hello")?,
        "help" => no_args(args, Command::Help, "help")?,
        "all" => no_args(args, Command::All, "all")?,
        "close" | "exit" => Command::Exit,
        "add" => match <[String; 2]>::try_from(args) {
            Ok([name, phone]) => Command::Add {
                name,
                phone: Some(phone),
            },
            Err(args) => {
                let [name] = exactly(args, USAGE_ADD)?;
                Command::Add { name, phone: None }
            }
        },
        "change" => match <[String; 3]>::try_from(args) {
            Ok([name, old, new]) => Command::Change {
                name,
                old: Some(old),
                new,
            },
            Err(args) => {
                let [name, new] = exactly(args, USAGE_CHANGE)?;
                Command::Change {
                    name,
                    old: None,
                    new,
                }
            }
        },
        "phone" => {
            let [name] = exactly(args, USAGE_PHONE)?;
            Command::Phone { name }
        }
        "remove-phone" => {
            let [name, phone] = exactly(args, USAGE_REMOVE_PHONE)?;
            Command::RemovePhone { name, phone }
        }
        "delete" => {
            let [name] = exactly(args, USAGE_DELETE)?;
            Command::Delete { name }
        }
        "add-birthday" => {
            let [name, birthday] = exactly(args, USAGE_ADD_BIRTHDAY)?;
            Command::AddBirthday { name, birthday }
        }
        "show-birthday" => {
            let [name] = exactly(args, USAGE_SHOW_BIRTHDAY)?;
            Command::ShowBirthday { name }
        }
        "birthdays" => match args.as_slice() {
            [] => Command::Birthdays { days: None },
            [days] => Command::Birthdays {
                days: Some(
                    days.parse()
                        .map_err(|_| CommandError::Usage(USAGE_BIRTHDAYS))?,
                ),
            },
            _ => return Err(CommandError::Usage(USAGE_BIRTHDAYS)),
        },
        _ => return Err(CommandError::UnknownCommand(keyword)),
    };

    Ok(command)
}

fn exactly<const N: usize>(
    args: Vec<String>,
    usage: &'static str,
) -> Result<[String; N], CommandError> {
    <[String; N]>::try_from(args).map_err(|_| CommandError::Usage(usage))
}

fn no_args(
    args: Vec<String>,
    command: Command,
    usage: &'static str,
) -> Result<Command, CommandError> {
    if !args.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(command)
}
