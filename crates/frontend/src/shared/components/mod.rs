pub mod paged_table;
pub mod pagination_controls;
pub mod table;
