pub mod binding;
pub mod descriptor;
pub mod generator;
pub mod handler;
pub mod logic;
pub mod snippets;
