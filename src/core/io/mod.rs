pub mod hts;
pub mod table;
