pub mod list_authors_cmd;
