pub mod donor_registry_query_service_impl;
