pub mod catalog;
pub mod middleware;
pub mod search;
