use crate::utils::error::{LibraryError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind-specific data of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Book { isbn: String },
    Periodical { issue: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub kind: ItemKind,
    available: bool,
}

impl Item {
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            kind,
            available: true,
        }
    }

    pub fn book(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::new(ItemId(id), title, author, ItemKind::Book { isbn: isbn.into() })
    }

    pub fn periodical(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self::new(
            ItemId(id),
            title,
            author,
            ItemKind::Periodical {
                issue: issue.into(),
            },
        )
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// One-line description used by the listing and search screens.
    pub fn describe(&self) -> String {
        let availability = if self.available { "Yes" } else { "No" };
        match &self.kind {
            ItemKind::Book { isbn } => format!(
                "[{}] Book - Title: {}, Author: {}, ISBN: {}, Available: {}",
                self.id, self.title, self.author, isbn, availability
            ),
            ItemKind::Periodical { issue } => format!(
                "[{}] Periodical - Title: {}, Author: {}, Issue: {}, Available: {}",
                self.id, self.title, self.author, issue, availability
            ),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub is_member: bool,
    borrowed: Vec<ItemId>,
}

impl Member {
    pub fn new(id: u32, name: impl Into<String>, is_member: bool) -> Self {
        Self {
            id: MemberId(id),
            name: name.into(),
            is_member,
            borrowed: Vec::new(),
        }
    }

    /// Ids of the items currently on loan to this member, in borrow order.
    pub fn borrowed_items(&self) -> &[ItemId] {
        &self.borrowed
    }

    pub fn has_borrowed(&self, id: ItemId) -> bool {
        self.borrowed.contains(&id)
    }

    /// Available -> Borrowed. An unavailable item is left untouched.
    pub fn borrow_item(&mut self, item: &mut Item) -> Result<String> {
        if !item.available {
            return Err(LibraryError::ItemUnavailable {
                title: item.title.clone(),
            });
        }
        item.available = false;
        self.borrowed.push(item.id);
        Ok(format!("{} borrowed {}.", self.name, item.title))
    }

    /// Borrowed -> Available, only for items this member holds.
    pub fn return_item(&mut self, item: &mut Item) -> Result<String> {
        let Some(position) = self.borrowed.iter().position(|id| *id == item.id) else {
            return Err(LibraryError::NotBorrowed {
                member: self.name.clone(),
                title: item.title.clone(),
            });
        };
        self.borrowed.remove(position);
        item.available = true;
        Ok(format!("{} returned {}.", self.name, item.title))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Borrow,
    Return,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrow => f.write_str("Borrow"),
            Self::Return => f.write_str("Return"),
        }
    }
}

/// One line of the action log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEntry {
    pub timestamp: DateTime<Local>,
    pub action: Action,
    pub message: String,
}

impl ActionEntry {
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.6f";

    pub fn new(action: Action, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            action,
            message: message.into(),
        }
    }
}

impl fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format(Self::TIMESTAMP_FORMAT),
            self.action,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_then_return_restores_item() {
        let mut member = Member::new(101, "Shubham", true);
        let mut item = Item::book(1, "The Great Gatsby", "F. Scott Fitzgerald", "9780743273565");
        let before = item.clone();

        assert_eq!(
            member.borrow_item(&mut item).unwrap(),
            "Shubham borrowed The Great Gatsby."
        );
        assert!(!item.is_available());
        assert_eq!(member.borrowed_items(), &[ItemId(1)]);

        assert_eq!(
            member.return_item(&mut item).unwrap(),
            "Shubham returned The Great Gatsby."
        );
        assert_eq!(item, before);
        assert!(member.borrowed_items().is_empty());
    }

    #[test]
    fn test_borrow_unavailable_item_is_noop() {
        let mut first = Member::new(101, "Shubham", true);
        let mut second = Member::new(102, "Naina", true);
        let mut item = Item::periodical(2, "National Geographic", "Various", "2023-05");

        first.borrow_item(&mut item).unwrap();
        let err = second.borrow_item(&mut item).unwrap_err();

        assert!(matches!(err, LibraryError::ItemUnavailable { .. }));
        assert!(second.borrowed_items().is_empty());
        assert_eq!(first.borrowed_items(), &[ItemId(2)]);
        assert!(!item.is_available());
    }

    #[test]
    fn test_return_of_item_held_by_someone_else() {
        let mut holder = Member::new(101, "Shubham", true);
        let mut other = Member::new(102, "Naina", true);
        let mut item = Item::book(9, "India 2020", "Dr. A.P.J. Abdul Kalam", "9780143423683");

        holder.borrow_item(&mut item).unwrap();
        let err = other.return_item(&mut item).unwrap_err();

        assert_eq!(err.user_friendly_message(), "Naina did not borrow India 2020.");
        assert!(!item.is_available());
        assert!(holder.has_borrowed(ItemId(9)));
    }

    #[test]
    fn test_describe() {
        let mut item = Item::book(1, "The Great Gatsby", "F. Scott Fitzgerald", "9780743273565");
        assert_eq!(
            item.describe(),
            "[1] Book - Title: The Great Gatsby, Author: F. Scott Fitzgerald, ISBN: 9780743273565, Available: Yes"
        );
        Member::new(101, "Shubham", true).borrow_item(&mut item).unwrap();
        assert!(item.describe().ends_with("Available: No"));

        let periodical = Item::periodical(15, "Harijan", "Mahatma Gandhi", "1947-01");
        assert_eq!(
            periodical.to_string(),
            "[15] Periodical - Title: Harijan, Author: Mahatma Gandhi, Issue: 1947-01, Available: Yes"
        );
    }

    #[test]
    fn test_action_entry_line_format() {
        let entry = ActionEntry::new(Action::Return, "Naina returned Harijan.");
        let line = entry.to_string();
        assert!(line.ends_with(" - Return: Naina returned Harijan."));
        let stamp = line.split(" - ").next().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, ActionEntry::TIMESTAMP_FORMAT).is_ok());
    }
}
