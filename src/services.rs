pub mod search;
pub mod order_builder;
pub mod client_service;
pub use client_service::ClientService;
pub mod product_service;
pub use product_service::ProductService;
pub mod order_service;
pub use order_service::OrderService;
pub mod report_service;
pub use report_service::ReportService;
