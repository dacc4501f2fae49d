mod format_tests;
mod sink_tests;

use std::sync::Arc;

use crate::console::FormattingConsole;
use crate::console::sink::BufferSink;

/// Console over capture buffers, with a fixed output width so table tests
/// do not depend on the test runner's terminal.
pub(super) fn capture_console(
    columns: usize,
) -> (FormattingConsole, Arc<BufferSink>, Arc<BufferSink>) {
    let out = Arc::new(BufferSink::with_columns(columns));
    let err = Arc::new(BufferSink::new());
    let console = FormattingConsole::new(out.clone(), err.clone());
    (console, out, err)
}
