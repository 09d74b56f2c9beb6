pub mod info;
pub mod remove;
pub mod select;
pub mod sort;
