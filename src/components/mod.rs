pub mod faq;
pub mod growth;
pub mod hero;
pub mod navbar;
pub mod plans;
pub mod ripple;
