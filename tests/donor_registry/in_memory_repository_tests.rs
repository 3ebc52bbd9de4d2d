use blood_donor_directory::donor_registry::{
    domain::model::commands::register_donor_command::RegisterDonorCommand,
    infrastructure::persistence::repositories::{
        donor_record_repository::DonorRecordRepository,
        in_memory::in_memory_donor_record_repository_impl::InMemoryDonorRecordRepositoryImpl,
    },
};

use crate::support::valid_parts;

fn command() -> RegisterDonorCommand {
    RegisterDonorCommand::new(valid_parts()).expect("valid command")
}

#[tokio::test]
async fn ids_grow_monotonically_even_when_store_is_emptied() {
    let repository = InMemoryDonorRecordRepositoryImpl::new();

    let first = repository.insert(command()).await.expect("insert");
    let second = repository.insert(command()).await.expect("insert");
    assert!(repository.delete_by_id(first.id()).await.expect("delete"));
    assert!(repository.delete_by_id(second.id()).await.expect("delete"));
    assert!(repository.list_all().await.expect("list").is_empty());

    let third = repository.insert(command()).await.expect("insert");

    assert_eq!(first.id().value(), 1);
    assert_eq!(second.id().value(), 2);
    assert_eq!(third.id().value(), 3);
}

#[tokio::test]
async fn listings_are_copies_of_stored_records() {
    let repository = InMemoryDonorRecordRepositoryImpl::new();
    let stored = repository.insert(command()).await.expect("insert");

    let mut listed = repository.list_all().await.expect("list");
    listed.clear();

    assert_eq!(repository.list_all().await.expect("list"), vec![stored]);
}

#[tokio::test]
async fn separate_instances_do_not_share_state() {
    let left = InMemoryDonorRecordRepositoryImpl::new();
    let right = InMemoryDonorRecordRepositoryImpl::default();

    left.insert(command()).await.expect("insert");
    left.insert(command()).await.expect("insert");
    let first_on_right = right.insert(command()).await.expect("insert");

    assert_eq!(first_on_right.id().value(), 1);
    assert_eq!(left.list_all().await.expect("list").len(), 2);
    assert_eq!(right.list_all().await.expect("list").len(), 1);
}
