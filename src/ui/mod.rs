/// Terminal presentation: prompts, raw-row paging and text tables.
pub mod pager;
pub mod prompt;
pub mod table;
