pub mod blood_group;
pub mod donor_registry_domain_error;
pub mod donor_removal_outcome;
