mod env;
mod log;
mod test_logger;
mod tokio;
pub mod types;

pub use self::env::*;
pub use self::log::*;
pub use self::test_logger::*;
pub use self::tokio::*;
