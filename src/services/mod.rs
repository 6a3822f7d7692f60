pub mod categories;
pub mod discovery;
pub mod format;
pub mod picker;
pub mod youku;
