pub mod in_memory_donor_record_repository_impl;
