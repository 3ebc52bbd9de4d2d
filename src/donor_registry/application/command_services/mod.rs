pub mod donor_registry_command_service_impl;
