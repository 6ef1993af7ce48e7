mod board_tests;
mod lawyers_tests;
mod pages_tests;
mod report_tests;
