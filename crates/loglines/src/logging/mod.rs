//! Loggers: the leveled-logging front end
//!
//! - `Log`: one formatter, any number of writers
//! - `MultiLog`: forwards each call to several loggers
//! - `TestLog`: in-memory logger for assertions

mod traits;
mod writer_log;
mod multi;
mod test_log;

pub use traits::{Logger, LoggerExt, SharedLogger, ERROR_CONTEXT};
pub use writer_log::Log;
pub use multi::{MultiLog, MULTI_LOG_NAME};
pub use test_log::{TestLog, TEST_LOG_NAME};
