use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::donor_registry::domain::model::commands::register_donor_command::RegisterDonorCommandParts;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterDonorRequestResource {
    #[schema(value_type = Option<String>, example = "Sahil")]
    pub name: Option<Value>,

    #[schema(value_type = Option<String>, example = "O+")]
    pub blood_group: Option<Value>,

    #[schema(value_type = Option<String>, example = "Hisar")]
    pub city: Option<Value>,

    #[schema(value_type = Option<String>, example = "9999999999")]
    pub phone: Option<Value>,
}

impl RegisterDonorRequestResource {
    pub fn into_command_parts(self) -> RegisterDonorCommandParts {
        RegisterDonorCommandParts {
            name: text_field(self.name),
            blood_group: text_field(self.blood_group),
            city: text_field(self.city),
            phone: text_field(self.phone),
        }
    }
}

fn text_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
