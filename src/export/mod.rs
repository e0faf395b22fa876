//! エクスポート機能

pub mod csv;

pub use self::csv::{write_items_csv, write_items_csv_file};
