pub mod destination;
pub mod store;
pub mod writer;
