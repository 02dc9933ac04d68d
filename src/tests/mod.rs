mod config_tests;
mod error_tests;
mod keys_tests;
mod theme_tests;
