use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::donor_registry::{
    domain::model::{
        commands::register_donor_command::RegisterDonorCommand,
        entities::donor_record::DonorRecord,
        enums::{blood_group::BloodGroup, donor_registry_domain_error::DonorRegistryDomainError},
        queries::search_donors_query::SearchDonorsQuery,
        value_objects::{
            city_name::CityName, donor_id::DonorId, donor_name::DonorName,
            phone_number::PhoneNumber,
        },
    },
    infrastructure::persistence::repositories::donor_record_repository::DonorRecordRepository,
};

pub struct SqlxDonorRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxDonorRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<DonorRecord, DonorRegistryDomainError> {
        let id_raw: i64 = row.try_get("id").map_err(map_infra_error)?;
        let name_raw: String = row.try_get("name").map_err(map_infra_error)?;
        let blood_group_raw: String = row.try_get("blood_group").map_err(map_infra_error)?;
        let city_raw: String = row.try_get("city").map_err(map_infra_error)?;
        let phone_raw: String = row.try_get("phone").map_err(map_infra_error)?;

        restore_stored_donor(id_raw, name_raw, &blood_group_raw, city_raw, phone_raw)
    }
}

fn restore_stored_donor(
    id_raw: i64,
    name_raw: String,
    blood_group_raw: &str,
    city_raw: String,
    phone_raw: String,
) -> Result<DonorRecord, DonorRegistryDomainError> {
    Ok(DonorRecord::restore(
        restore_stored_id(id_raw)?,
        DonorName::new(name_raw).map_err(|_| map_corrupt_column("name"))?,
        blood_group_raw
            .parse::<BloodGroup>()
            .map_err(|_| map_corrupt_column("blood_group"))?,
        CityName::new(city_raw).map_err(|_| map_corrupt_column("city"))?,
        PhoneNumber::new(phone_raw).map_err(|_| map_corrupt_column("phone"))?,
    ))
}

fn restore_stored_id(id_raw: i64) -> Result<DonorId, DonorRegistryDomainError> {
    DonorId::new(id_raw).map_err(|_| map_corrupt_column("id"))
}

fn map_corrupt_column(column: &str) -> DonorRegistryDomainError {
    DonorRegistryDomainError::InfrastructureError(format!("invalid donor {column} stored"))
}

#[async_trait]
impl DonorRecordRepository for SqlxDonorRecordRepositoryImpl {
    async fn insert(
        &self,
        command: RegisterDonorCommand,
    ) -> Result<DonorRecord, DonorRegistryDomainError> {
        let statement = r#"
            INSERT INTO donors (name, blood_group, city, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#;

        let row = sqlx::query(statement)
            .bind(command.name().value())
            .bind(command.blood_group().as_str())
            .bind(command.city().value())
            .bind(command.phone().value())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let id_raw: i64 = row.try_get("id").map_err(map_infra_error)?;

        Ok(command.into_record(restore_stored_id(id_raw)?))
    }

    async fn list_all(&self) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        let statement = r#"
            SELECT id, name, blood_group, city, phone
            FROM donors
            ORDER BY id ASC
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn list_matching(
        &self,
        query: &SearchDonorsQuery,
    ) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        let statement = r#"
            SELECT id, name, blood_group, city, phone
            FROM donors
            WHERE ($1::TEXT IS NULL OR lower(blood_group) = $1)
              AND ($2::TEXT IS NULL OR lower(city) = $2)
            ORDER BY id ASC
        "#;

        let rows = sqlx::query(statement)
            .bind(query.blood_group())
            .bind(query.city())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn delete_by_id(&self, donor_id: DonorId) -> Result<bool, DonorRegistryDomainError> {
        let result = sqlx::query("DELETE FROM donors WHERE id = $1")
            .bind(donor_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_infra_error(error: sqlx::Error) -> DonorRegistryDomainError {
    DonorRegistryDomainError::InfrastructureError(error.to_string())
}
