//! Integration tests for create_release_tag

mod helpers;

mod test_cli;
