pub mod donor_registry_rest_controller;
