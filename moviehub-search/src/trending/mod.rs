//! Trending datastore implementations.

pub mod appwrite;
pub mod memory;

pub use appwrite::AppwriteTrendingStore;
pub use memory::InMemoryTrendingStore;
