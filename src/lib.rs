pub mod console;
pub mod errors;

pub use console::sink::{BufferSink, Sink, StderrSink, StdoutSink};
pub use console::{FormattingConsole, Level, LineFormatter};
