pub mod sqlx_donor_record_repository_impl;
