use blood_donor_directory::donor_registry::domain::{
    model::enums::donor_registry_domain_error::DonorRegistryDomainError,
    services::{
        donor_registry_command_service::DonorRegistryCommandService,
        donor_registry_query_service::DonorRegistryQueryService,
    },
};

use crate::support::{
    create_failing_harness, create_harness, donor_parts, remove_command, stored_count, valid_parts,
};

#[tokio::test]
async fn handle_register_assigns_fresh_id_and_keeps_fields() {
    let harness = create_harness();

    let record = harness
        .command_service
        .handle_register(valid_parts())
        .await
        .expect("registration should succeed");

    assert_eq!(record.id().value(), 1);
    assert_eq!(record.name().value(), "Sahil");
    assert_eq!(record.blood_group().as_str(), "O+");
    assert_eq!(record.city().value(), "Hisar");
    assert_eq!(record.phone().value(), "9999999999");
    assert_eq!(stored_count(&harness.query_service).await, 1);
}

#[tokio::test]
async fn handle_register_rejects_without_touching_the_store() {
    let harness = create_harness();
    harness
        .command_service
        .handle_register(valid_parts())
        .await
        .expect("registration should succeed");

    let result = harness
        .command_service
        .handle_register(donor_parts("Sahil", "X+", "Hisar", "9999999999"))
        .await;

    assert!(matches!(result, Err(DonorRegistryDomainError::InvalidBloodGroup)));
    assert_eq!(harness.repository.stats().0, 1);
    assert_eq!(stored_count(&harness.query_service).await, 1);
}

#[tokio::test]
async fn ids_are_never_reused_after_deletion() {
    let harness = create_harness();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let record = harness
            .command_service
            .handle_register(valid_parts())
            .await
            .expect("registration should succeed");
        ids.push(record.id());
    }

    harness
        .command_service
        .handle_remove(remove_command(ids[1]))
        .await
        .expect("removal should succeed");

    let newcomer = harness
        .command_service
        .handle_register(valid_parts())
        .await
        .expect("registration should succeed");

    assert!(!ids.contains(&newcomer.id()));

    let held: Vec<_> = harness
        .query_service
        .handle_search(Default::default())
        .await
        .expect("search should succeed")
        .iter()
        .map(|record| record.id())
        .collect();
    assert_eq!(held, vec![ids[0], ids[2], newcomer.id()]);
}

#[tokio::test]
async fn concurrent_registrations_receive_distinct_ids() {
    let harness = std::sync::Arc::new(create_harness());

    let mut handles = Vec::new();
    for _ in 0..32 {
        let harness = harness.clone();
        handles.push(tokio::spawn(async move {
            harness
                .command_service
                .handle_register(valid_parts())
                .await
                .expect("registration should succeed")
                .id()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("task should finish"));
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 32);
}

#[tokio::test]
async fn handle_register_surfaces_storage_faults_as_infrastructure_errors() {
    let (command_service, _) = create_failing_harness();

    let result = command_service.handle_register(valid_parts()).await;

    match result {
        Err(error) => {
            assert!(matches!(error, DonorRegistryDomainError::InfrastructureError(_)));
            assert!(!error.is_validation_rejection());
        }
        Ok(_) => panic!("storage fault should not be swallowed"),
    }
}

#[tokio::test]
async fn validation_rejection_wins_even_when_store_is_down() {
    let (command_service, _) = create_failing_harness();

    let result = command_service
        .handle_register(donor_parts("Sahil", "O+", "Hisar", "12345"))
        .await;

    assert!(matches!(result, Err(DonorRegistryDomainError::InvalidPhone)));
}
