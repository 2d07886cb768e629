// Checker Test Modules

mod checker_tests;
