pub mod client;
pub mod order;
pub mod product;
pub mod report;
