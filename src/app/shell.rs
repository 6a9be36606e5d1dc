//! Line-based menu in front of the catalog.
//!
//! The shell owns all parsing of user input; the catalog only ever sees
//! well-formed ids and search criteria.

use crate::core::catalog::Catalog;
use crate::core::search::{SearchCriteria, SearchField};
use crate::domain::model::{Action, ItemId, MemberId};
use crate::domain::ports::ActionRecorder;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const RULE: &str =
    "<====================================================================================>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayAll,
    Search,
    Borrow,
    Return,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::DisplayAll),
            "2" => Some(Self::Search),
            "3" => Some(Self::Borrow),
            "4" => Some(Self::Return),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Shell<'a, R: ActionRecorder, I: BufRead, O: Write> {
    catalog: &'a mut Catalog<R>,
    input: I,
    output: O,
    title: String,
}

impl<'a, R: ActionRecorder, I: BufRead, O: Write> Shell<'a, R, I, O> {
    pub fn new(catalog: &'a mut Catalog<R>, input: I, output: O) -> Self {
        Self {
            catalog,
            input,
            output,
            title: crate::config::toml_config::DEFAULT_LIBRARY_NAME.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Runs until the user exits or input ends. Only fatal errors are returned;
    /// everything else is printed and the menu comes back.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("Input closed, leaving the menu");
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Borrow) => self.transact(Action::Borrow)?,
                Some(MenuChoice::Return) => self.transact(Action::Return)?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Exiting {}. Goodbye!", self.title)?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "\n{}", self.title)?;
        writeln!(self.output, "1. Display all items")?;
        writeln!(self.output, "2. Search items")?;
        writeln!(self.output, "3. Borrow an item")?;
        writeln!(self.output, "4. Return an item")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    /// `None` once the input stream is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        // bytes that are not UTF-8 become replacement chars and fail parsing like any typo
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn prompt_id(&mut self, label: &str) -> Result<Option<u32>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.parse::<u32>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                tracing::debug!("Rejected non-numeric id input: {:?}", raw);
                writeln!(self.output, "Please enter a numeric ID.")?;
                Ok(None)
            }
        }
    }

    fn display_all(&mut self) -> Result<()> {
        match self.catalog.display_all() {
            Some(lines) => {
                for line in lines {
                    writeln!(self.output, "{}", line)?;
                }
            }
            None => writeln!(self.output, "No items available in the library.")?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let Some(key) = self.prompt("Search by (title/author): ")? else {
            return Ok(());
        };
        let field = match key.parse::<SearchField>() {
            Ok(field) => field,
            Err(err) => {
                writeln!(self.output, "{}", err.user_friendly_message())?;
                return Ok(());
            }
        };
        let Some(value) = self.prompt(&format!("Enter {}: ", field))? else {
            return Ok(());
        };

        let criteria = SearchCriteria::new().with(field, &value);
        let results: Vec<String> = self
            .catalog
            .search(&criteria)
            .into_iter()
            .map(|item| item.describe())
            .collect();
        tracing::debug!("Search {}={:?} matched {} items", field, value, results.len());

        if results.is_empty() {
            writeln!(self.output, "No items found.")?;
        }
        for line in results {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn transact(&mut self, action: Action) -> Result<()> {
        let Some(member_id) = self.prompt_id("Enter your member ID: ")? else {
            return Ok(());
        };
        let verb = match action {
            Action::Borrow => "borrow",
            Action::Return => "return",
        };
        let Some(item_id) = self.prompt_id(&format!("Enter item ID to {}: ", verb))? else {
            return Ok(());
        };

        let member_id = MemberId(member_id);
        if self.catalog.member(member_id).is_none() {
            writeln!(self.output, "Member not found.")?;
            return Ok(());
        }

        let outcome = match action {
            Action::Borrow => self.catalog.borrow(member_id, ItemId(item_id)),
            Action::Return => self.catalog.return_item(member_id, ItemId(item_id)),
        };

        match outcome {
            Ok(message) => writeln!(self.output, "{}", message)?,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => writeln!(self.output, "{}", err.user_friendly_message())?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::action_log::InMemoryActionLog;
    use crate::domain::model::{Item, Member};
    use std::io::Cursor;

    fn catalog() -> Catalog<InMemoryActionLog> {
        let mut catalog = Catalog::new(InMemoryActionLog::new());
        catalog
            .add_item(Item::book(1, "The Great Gatsby", "F. Scott Fitzgerald", "9780743273565"))
            .unwrap();
        catalog.add_member(Member::new(101, "Shubham", true)).unwrap();
        catalog
    }

    fn run(catalog: &mut Catalog<InMemoryActionLog>, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(catalog, Cursor::new(script.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::Borrow));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("borrow"), None);
    }

    #[test]
    fn test_invalid_choice_reprints_menu() {
        let mut catalog = catalog();
        let output = run(&mut catalog, "9\n5\n");
        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("1. Display all items").count(), 2);
        assert!(output.ends_with("Exiting Library Management System. Goodbye!\n"));
    }

    #[test]
    fn test_non_numeric_id_returns_to_menu() {
        let mut catalog = catalog();
        let output = run(&mut catalog, "3\nabc\n5\n");
        assert!(output.contains("Please enter a numeric ID."));
        assert!(catalog.recorder().entries().is_empty());
    }

    #[test]
    fn test_non_utf8_input_is_an_invalid_choice() {
        let mut catalog = catalog();
        let mut output = Vec::new();
        Shell::new(&mut catalog, Cursor::new(b"\xff\n3\n\xfe1\n5\n".to_vec()), &mut output)
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Please enter a numeric ID."));
        assert!(output.ends_with("Goodbye!\n"));
        assert!(catalog.recorder().entries().is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut catalog = catalog();
        let output = run(&mut catalog, "1\n");
        assert!(output.contains("The Great Gatsby"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_custom_title() {
        let mut catalog = catalog();
        let mut output = Vec::new();
        Shell::new(&mut catalog, Cursor::new("5\n"), &mut output)
            .with_title("Branch Library")
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("\nBranch Library\n"));
        assert!(output.contains("Exiting Branch Library. Goodbye!"));
    }
}
