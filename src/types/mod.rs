pub mod choice;
pub mod manifest;
