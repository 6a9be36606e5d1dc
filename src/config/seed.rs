//! Catalog contents used when the configuration file does not list any.

use crate::domain::model::{Item, Member};

pub fn default_items() -> Vec<Item> {
    vec![
        Item::book(1, "The Great Gatsby", "F. Scott Fitzgerald", "9780743273565"),
        Item::periodical(2, "National Geographic", "Various", "2023-05"),
        Item::book(3, "Five Point Someone", "Chetan Bhagat", "9788129115300"),
        Item::book(4, "2 States", "Chetan Bhagat", "9788129115301"),
        Item::book(5, "The 3 Mistakes of My Life", "Chetan Bhagat", "9788129115233"),
        Item::book(6, "One Night @ the Call Center", "Chetan Bhagat", "9788129117206"),
        Item::book(7, "Wings of Fire", "Dr. A.P.J. Abdul Kalam", "9788173711466"),
        Item::book(8, "Ignited Minds", "Dr. A.P.J. Abdul Kalam", "9780143424123"),
        Item::book(9, "India 2020", "Dr. A.P.J. Abdul Kalam", "9780143423683"),
        Item::book(
            10,
            "My Journey: Transforming Dreams into Actions",
            "Dr. A.P.J. Abdul Kalam",
            "9788129124914",
        ),
        Item::book(11, "The God of Small Things", "Arundhati Roy", "9788172234980"),
        Item::book(12, "Midnight's Children", "Salman Rushdie", "9780099578512"),
        Item::book(13, "Train to Pakistan", "Khushwant Singh", "9780143065883"),
        Item::book(14, "The White Tiger", "Aravind Adiga", "9781416562603"),
        Item::periodical(15, "Harijan", "Mahatma Gandhi", "1947-01"),
        Item::periodical(16, "The Modern Review", "Ramananda Chatterjee", "1947-02"),
        Item::periodical(17, "Young India", "Mahatma Gandhi", "1947-03"),
        Item::periodical(18, "The Pioneer", "George Allen", "1947-04"),
    ]
}

pub fn default_members() -> Vec<Member> {
    vec![
        Member::new(101, "Shubham", true),
        Member::new(102, "Naina", true),
        Member::new(103, "Abhishek", false),
        Member::new(104, "Ashu", false),
    ]
}
