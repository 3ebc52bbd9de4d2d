pub mod register_donor_command;
pub mod remove_donor_command;
