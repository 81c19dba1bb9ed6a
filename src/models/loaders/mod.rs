pub mod xlsx_loader;

pub use xlsx_loader::{load_score_table, load_score_table_from_path};
