//! Interactive command loop.
//!
//! Thin I/O glue over the library: reads line-oriented commands, converts
//! raw input into domain values at the boundary, calls the directory, and
//! renders every error kind as a message instead of letting it escape. No
//! error here is fatal; the loop always comes back to the prompt.

use crate::directory::{Directory, DirectoryError};
use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::models::ContactRecord;
use crate::pagination::Paginator;
use chrono::Local;
use std::io::{self, BufRead, Write};

const GREETINGS: &[&str] = &["hi", "hello"];
const FAREWELLS: &[&str] = &["good bye", "close", "exit"];

const HELP: &str = "How can I help you?\n\
    The following commands are available to you:\n\
    (add, change, phone, birthday, remove, show all, exit)";

/// Run the command loop until the user says good bye.
///
/// Owns the single `Directory` instance for the session; there is no
/// process-wide singleton behind it.
pub fn run(directory: &mut Directory) -> io::Result<()> {
    loop {
        let action = prompt(
            "Welcome! To start work enter <hello> or <hi>\n\
             To finish, enter one of (good bye, close, exit): ",
        )?
        .to_lowercase();

        if GREETINGS.contains(&action.as_str()) {
            println!("{}", HELP);
        } else if FAREWELLS.contains(&action.as_str()) {
            println!("Good bye!");
            return Ok(());
        } else {
            dispatch(&action, directory)?;
        }
    }
}

fn dispatch(command: &str, directory: &mut Directory) -> io::Result<()> {
    let outcome = if command.starts_with("add") {
        add_contact(directory)
    } else if command.starts_with("change") {
        change_contact(directory)
    } else if command.starts_with("phone") {
        show_phone(directory)
    } else if command.starts_with("birthday") {
        show_birthday(directory)
    } else if command.starts_with("remove") {
        remove_contact(directory)
    } else if command.starts_with("show all") {
        show_all(directory)
    } else {
        println!("Invalid command. Please try again.");
        Ok(())
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(CommandError::Io(e)) => Err(e),
        Err(CommandError::Failed(message)) => {
            println!("{}", message);
            Ok(())
        }
    }
}

/// What a single command can produce: real I/O trouble on the console, or a
/// domain/storage failure already turned into a user-facing message.
enum CommandError {
    Io(io::Error),
    Failed(String),
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ValidationError> for CommandError {
    fn from(e: ValidationError) -> Self {
        Self::Failed(format!("Invalid input: {}", e))
    }
}

impl From<DirectoryError> for CommandError {
    fn from(e: DirectoryError) -> Self {
        Self::Failed(e.to_string())
    }
}

impl From<crate::error::StorageError> for CommandError {
    fn from(e: crate::error::StorageError) -> Self {
        Self::Failed(e.to_string())
    }
}

impl From<crate::error::NotFoundError> for CommandError {
    fn from(e: crate::error::NotFoundError) -> Self {
        Self::Failed(e.to_string())
    }
}

type CommandResult = Result<(), CommandError>;

fn add_contact(directory: &mut Directory) -> CommandResult {
    let name = Name::new(prompt("Enter name: ")?)?;
    let phone = PhoneNumber::new(prompt("Enter phone: ")?)?;

    let birthday_raw = prompt("Enter birthday (YYYY-MM-DD, empty for none): ")?;
    let birthday = if birthday_raw.is_empty() {
        None
    } else {
        Some(Birthday::parse(&birthday_raw)?)
    };

    let mut record = ContactRecord::new(name.clone(), birthday);
    record.add_phone(phone.clone());
    directory.add_record(record)?;
    println!("Contact {} with phone {} has been added.", name, phone);
    Ok(())
}

fn change_contact(directory: &mut Directory) -> CommandResult {
    let name = prompt("Enter name: ")?;
    let new_phone = PhoneNumber::new(prompt("Enter new phone: ")?)?;

    let Some(record) = directory.find_by_name_mut(&name) else {
        println!("Contact not found.");
        return Ok(());
    };
    let Some(old_phone) = record.phones().first().cloned() else {
        println!("Contact has no phone to change.");
        return Ok(());
    };
    record.edit_phone(&old_phone, new_phone.clone())?;
    directory.persist()?;
    println!("Phone for contact {} has been changed to {}.", name, new_phone);
    Ok(())
}

fn show_phone(directory: &mut Directory) -> CommandResult {
    let name = prompt("Enter name: ")?;
    match directory.find_by_name(&name) {
        Some(record) => println!("{}", record.render()),
        None => println!("Contact not found."),
    }
    Ok(())
}

fn show_birthday(directory: &mut Directory) -> CommandResult {
    let name = prompt("Enter name: ")?;
    let Some(record) = directory.find_by_name(&name) else {
        println!("Contact not found.");
        return Ok(());
    };
    let today = Local::now().date_naive();
    match record.days_to_birthday(today) {
        Some(0) => println!("{}'s birthday is today!", name),
        Some(days) => println!("{} days until {}'s birthday.", days, name),
        None => println!("No birthday on file for {}.", name),
    }
    Ok(())
}

fn remove_contact(directory: &mut Directory) -> CommandResult {
    let name = prompt("Enter name: ")?;
    directory.remove_record(&name)?;
    println!("Contact {} has been removed.", name);
    Ok(())
}

/// Search, then walk the matches page by page.
fn show_all(directory: &mut Directory) -> CommandResult {
    let query = prompt("Enter search term: ")?;
    let records = directory.search(&query);
    if records.is_empty() {
        println!("No matching contacts found.");
        return Ok(());
    }

    let pager = prompt_page_size(records)?;
    let page_count = pager.page_count();
    for page in 1..=page_count {
        println!("Page {}:", page);
        // In range by construction
        if let Ok(items) = pager.page(page) {
            for record in items {
                println!("{}", record.render());
            }
        }
        if page < page_count {
            let input = prompt("Press Enter to continue, or 'q' to quit: ")?;
            if input == "q" {
                break;
            }
        }
    }
    Ok(())
}

/// Keep asking for a page size until it validates. ValidationError is the
/// one retryable-at-the-prompt kind.
fn prompt_page_size(records: Vec<ContactRecord>) -> Result<Paginator<ContactRecord>, io::Error> {
    let count = records.len();
    loop {
        let raw = prompt(&format!("Enter page size ({} matches): ", count))?;
        let size = raw.parse::<usize>().unwrap_or(0);
        match Paginator::new(records.clone(), size) {
            Ok(pager) => return Ok(pager),
            Err(e) => println!("Invalid input: {}. Please enter a positive number.", e),
        }
    }
}

fn prompt(text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
