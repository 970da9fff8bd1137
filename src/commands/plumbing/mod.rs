pub mod header;
pub mod ls_files;
pub mod show;
pub mod tail;
