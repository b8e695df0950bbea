pub mod entry;
pub mod reference;
pub mod row;
