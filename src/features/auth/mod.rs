pub mod dtos;
pub mod session;
pub mod store;

pub use session::{AuthState, Session};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredSession};
