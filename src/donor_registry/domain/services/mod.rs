pub mod donor_registry_command_service;
pub mod donor_registry_query_service;
