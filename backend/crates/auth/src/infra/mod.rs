//! Infrastructure Layer
//!
//! Store implementations. Storage is in-memory and volatile; the
//! repository trait keeps the business logic independent of the backing
//! store.

pub mod memory;

pub use memory::InMemoryUserRepository;
