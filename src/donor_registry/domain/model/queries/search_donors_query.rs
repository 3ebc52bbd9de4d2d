use crate::donor_registry::domain::model::entities::donor_record::DonorRecord;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchDonorsQuery {
    blood_group: Option<String>,
    city: Option<String>,
}

impl SearchDonorsQuery {
    pub fn new(blood_group: Option<String>, city: Option<String>) -> Self {
        Self {
            blood_group: normalize_filter(blood_group),
            city: normalize_filter(city),
        }
    }

    pub fn blood_group(&self) -> Option<&str> {
        self.blood_group.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.blood_group.is_none() && self.city.is_none()
    }

    pub fn matches(&self, record: &DonorRecord) -> bool {
        let blood_group_matches = self
            .blood_group()
            .is_none_or(|wanted| record.blood_group().as_str().to_lowercase() == wanted);
        let city_matches = self
            .city()
            .is_none_or(|wanted| record.city().value().to_lowercase() == wanted);

        blood_group_matches && city_matches
    }
}

fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.to_lowercase())
}
