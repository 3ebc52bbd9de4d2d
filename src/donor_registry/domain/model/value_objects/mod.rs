pub mod city_name;
pub mod donor_id;
pub mod donor_name;
pub mod phone_number;
