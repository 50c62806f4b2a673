pub mod footer;
pub mod header;
pub mod modals;
pub mod result_list;
pub mod search_bar;
