mod codec;
mod dir;
mod memory;
mod persist;
mod record;
mod repository;

pub use dir::DirRepository;
pub use memory::MemoryRepository;
pub use record::TransferRecord;
pub use repository::Repository;
