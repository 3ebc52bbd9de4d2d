pub mod donor_record;
