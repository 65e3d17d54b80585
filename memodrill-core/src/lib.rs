pub mod clock;
pub mod collection;
pub mod errors;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod stats;

pub use clock::*;
pub use collection::*;
pub use errors::*;
pub use models::*;
pub use scheduler::*;
pub use session::*;
pub use stats::*;
