pub mod donor_record_repository;
pub mod in_memory;
pub mod postgres;
