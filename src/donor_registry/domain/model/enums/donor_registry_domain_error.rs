use thiserror::Error;

#[derive(Debug, Error)]
pub enum DonorRegistryDomainError {
    #[error("donor name is required")]
    MissingName,

    #[error("donor city is required")]
    MissingCity,

    #[error("blood group is invalid; use one of A+, A-, B+, B-, AB+, AB-, O+, O-")]
    InvalidBloodGroup,

    #[error("phone number is invalid; use exactly 10 digits")]
    InvalidPhone,

    #[error("donor id is invalid; use a positive integer")]
    InvalidDonorId,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DonorRegistryDomainError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::MissingCity => "missing_city",
            Self::InvalidBloodGroup => "invalid_blood_group",
            Self::InvalidPhone => "invalid_phone",
            Self::InvalidDonorId => "invalid_donor_id",
            Self::InfrastructureError(_) => "infrastructure_error",
        }
    }

    pub fn is_validation_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingName | Self::MissingCity | Self::InvalidBloodGroup | Self::InvalidPhone
        )
    }
}
