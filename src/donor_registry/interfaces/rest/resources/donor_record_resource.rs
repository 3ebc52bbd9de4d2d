use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::donor_registry::domain::model::entities::donor_record::DonorRecord;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecordResource {
    pub id: i64,
    pub name: String,
    pub blood_group: String,
    pub city: String,
    pub phone: String,
}

impl From<DonorRecord> for DonorRecordResource {
    fn from(record: DonorRecord) -> Self {
        Self {
            id: record.id().value(),
            name: record.name().value().to_string(),
            blood_group: record.blood_group().as_str().to_string(),
            city: record.city().value().to_string(),
            phone: record.phone().value().to_string(),
        }
    }
}
