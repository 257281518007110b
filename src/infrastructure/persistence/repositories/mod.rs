mod in_memory_product_repository;
mod json_file_product_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use json_file_product_repository::JsonFileProductRepository;
