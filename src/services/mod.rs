mod database;
mod repository;

pub use database::ProductDb;
pub use repository::ProductRepository;
