
mod in_memory_repository_tests;
mod register_donor_tests;
