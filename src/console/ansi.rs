// ANSI/VT100 control sequences used when erasing an in-progress line.

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

/// Clear the entire current line.
pub const CLEAR_LINE: &str = crate::csi!("2K");
/// Return the cursor to column zero.
pub const CARRIAGE_RETURN: &str = "\r";
