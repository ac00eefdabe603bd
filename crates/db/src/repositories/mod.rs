pub mod reading_repo;

pub use reading_repo::ReadingRepo;
