pub mod mock;
pub use mock::MockStore;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod order_repo;
pub use order_repo::OrderRepository;
