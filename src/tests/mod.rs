mod detail_tests;
mod utils;
