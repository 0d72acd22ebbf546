pub mod actions;
pub mod arguments;
pub mod bumper;
pub mod driver;
pub mod scanner;
