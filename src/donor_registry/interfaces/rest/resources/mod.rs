pub mod donor_record_resource;
pub mod donor_removal_resource;
pub mod error_response_resource;
pub mod health_resource;
pub mod register_donor_request_resource;
pub mod search_donors_query_resource;
