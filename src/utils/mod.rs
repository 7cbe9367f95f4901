pub mod file;
pub mod logging;
pub mod naming;

pub use file::{copy_directory, ensure_directory_exists, list_font_files};
pub use logging::init_logging;
pub use naming::{clean_name, module_id};
