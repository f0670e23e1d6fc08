pub mod checks;

pub use checks::{check_all, is_blank, Check};
