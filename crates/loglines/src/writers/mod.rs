//! Log writers: destinations for formatted lines

mod traits;
mod console;
mod file;
mod trace;
mod test_writer;

pub use traits::{Level, LogWriter, SharedWriter};
pub use console::ConsoleWriter;
pub use file::{FileWriter, FileWriterRegistry, DEFAULT_FILE_NAME};
pub use trace::{TraceWriter, DEFAULT_TARGET};
pub use test_writer::TestWriter;
