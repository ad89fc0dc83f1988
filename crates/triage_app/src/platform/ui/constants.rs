//! Keys typed at the prompt.

pub const KEY_BACK: &str = "b";
pub const KEY_RESTART: &str = "r";
pub const KEY_COPY: &str = "c";
pub const KEY_OPEN: &str = "o";
pub const KEY_CLOSE: &str = "x";
pub const KEY_QUIT: &str = "q";
pub const KEY_HELP: &str = "?";

pub const PROGRESS_BAR_WIDTH: usize = 24;
