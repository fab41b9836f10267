//! Gateway tests against the relational store over in-memory SQLite.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};

use common::AppError;
use domain::{
    AssetCategoryRequest, EntityKind, GeoLocation, KvAttributeRequest, LocationRequest,
    ParameterRequest, ParameterValueRequest, ResponseCode, SystemRequest, VendorRequest,
};
use model_repository_lib::infra::Migrator;
use model_repository_lib::service::PersistenceHook;
use model_repository_lib::{Gateways, Stores};

async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn setup() -> Gateways {
    Gateways::from_stores(Stores::relational(setup_db().await), &[])
}

fn system(name: &str) -> SystemRequest {
    SystemRequest {
        name: name.to_string(),
        organization: "Acme".to_string(),
        ..Default::default()
    }
}

#[derive(Default)]
struct RecordingHook {
    events: Mutex<Vec<String>>,
}

impl PersistenceHook for RecordingHook {
    fn after_save(&self, kind: EntityKind, id: &str) {
        self.events.lock().unwrap().push(format!("save {} {}", kind, id));
    }

    fn after_delete(&self, kind: EntityKind, record: &Value) {
        self.events
            .lock()
            .unwrap()
            .push(format!("delete {} {}", kind, record["_id"].as_str().unwrap_or("")));
    }

    fn after_delete_all(&self, kind: EntityKind, count: u64) {
        self.events
            .lock()
            .unwrap()
            .push(format!("delete_all {} {}", kind, count));
    }
}

#[tokio::test]
async fn test_create_then_retrieve_system() {
    let gateways = setup().await;

    let request = SystemRequest {
        description: "Greenhouse sensors".to_string(),
        location: Some(LocationRequest {
            geo_location: GeoLocation {
                latitude: 37.98,
                longitude: 23.72,
            },
            virtual_location: String::new(),
        }),
        additional_information: vec![json!({"floor": 2})],
        attributes: vec![KvAttributeRequest {
            name: "calibration".to_string(),
            parameter_values: vec![ParameterValueRequest {
                name: "offset".to_string(),
                value: json!(0.25),
            }],
        }],
        ..system("Sensor-A")
    };

    let created = gateways.systems.create(request).await.unwrap();
    assert_eq!(created.code(), ResponseCode::Success);
    let created = created.into_response().unwrap();
    assert!(!created.id.is_empty());
    assert!(created.creation_date.is_some());

    let fetched = gateways
        .systems
        .retrieve_by_id(&created.id)
        .await
        .unwrap()
        .into_response()
        .unwrap();

    assert_eq!(fetched.name, "Sensor-A");
    assert_eq!(fetched.organization, "Acme");
    assert_eq!(fetched.location.geo_location.latitude, 37.98);
    assert_eq!(fetched.additional_information, vec![json!({"floor": 2})]);
    assert_eq!(fetched.attributes[0].parameter_values[0].value, json!(0.25));
    assert_eq!(fetched.creation_date, created.creation_date);
}

#[tokio::test]
async fn test_retrieve_missing_is_not_found() {
    let gateways = setup().await;

    let envelope = gateways.vendors.retrieve_by_id("missing-1").await.unwrap();
    assert_eq!(envelope.code(), ResponseCode::NotFound);

    let envelope = gateways.vendors.retrieve_by_name("Nobody").await.unwrap();
    assert_eq!(envelope.code(), ResponseCode::NotFound);
    assert_eq!(
        envelope.message(),
        "Failed to retrieve any Vendor entities from the database with Name: 'Nobody'."
    );
}

#[tokio::test]
async fn test_duplicate_names_return_oldest() {
    let gateways = setup().await;

    let first = gateways
        .systems
        .create(system("Twin"))
        .await
        .unwrap()
        .into_response()
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = gateways
        .systems
        .create(system("Twin"))
        .await
        .unwrap()
        .into_response()
        .unwrap();
    assert_ne!(first.id, second.id);

    let found = gateways
        .systems
        .retrieve_by_name("Twin")
        .await
        .unwrap()
        .into_response()
        .unwrap();
    assert_eq!(found.id, first.id);
}

#[tokio::test]
async fn test_paging_over_relational_store() {
    let gateways = setup().await;

    for i in 0..5 {
        gateways
            .vendors
            .create(VendorRequest {
                name: format!("Vendor-{}", i),
                description: String::new(),
            })
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let page = gateways.vendors.retrieve_all(1, 2).await.unwrap();
    assert_eq!(page.code(), ResponseCode::Success);
    let names: Vec<_> = page
        .list_of_responses()
        .unwrap()
        .iter()
        .map(|v| v.name.clone())
        .collect();
    assert_eq!(names, vec!["Vendor-2", "Vendor-3"]);
    let pagination = page.pagination_info().unwrap();
    assert_eq!(pagination.total_items(), 5);
    assert_eq!(pagination.total_pages(), 3);

    let last = gateways.vendors.retrieve_all(2, 2).await.unwrap();
    assert_eq!(last.list_of_responses().unwrap().len(), 1);

    let beyond = gateways.vendors.retrieve_all(3, 2).await.unwrap();
    assert_eq!(beyond.code(), ResponseCode::NotFound);
    assert!(beyond.message().contains("Total Pages: 3"));
}

#[tokio::test]
async fn test_huge_page_number_is_not_found() {
    let gateways = setup().await;
    gateways
        .vendors
        .create(VendorRequest {
            name: "Vendor-0".to_string(),
            description: String::new(),
        })
        .await
        .unwrap();

    let envelope = gateways
        .vendors
        .retrieve_all(u64::MAX / 10, 100)
        .await
        .unwrap();

    assert_eq!(envelope.code(), ResponseCode::NotFound);
    assert_eq!(
        envelope.message(),
        "Failed to retrieve any Vendor entities because page limit has been exceeded. Total Pages: 1"
    );

    let envelope = gateways.vendors.retrieve_all(u64::MAX, 1).await.unwrap();
    assert_eq!(envelope.code(), ResponseCode::NotFound);
}

#[tokio::test]
async fn test_empty_listing_is_not_found() {
    let gateways = setup().await;

    let envelope = gateways.asset_categories.retrieve_all(0, 10).await.unwrap();
    assert_eq!(envelope.code(), ResponseCode::NotFound);
    assert_eq!(
        envelope.message(),
        "Failed to retrieve any Asset Category entities from the database."
    );
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_creation_date() {
    let gateways = setup().await;

    let created = gateways
        .asset_categories
        .create(AssetCategoryRequest {
            name: "Thermometers".to_string(),
            description: String::new(),
            parameters: vec![ParameterRequest {
                name: "unit".to_string(),
                data_type: "string".to_string(),
                ..Default::default()
            }],
        })
        .await
        .unwrap()
        .into_response()
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = gateways
        .asset_categories
        .update(
            AssetCategoryRequest {
                name: "Hygrometers".to_string(),
                description: "Humidity".to_string(),
                parameters: Vec::new(),
            },
            &created.id,
        )
        .await
        .unwrap()
        .into_response()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Hygrometers");
    assert!(updated.parameters.is_empty());
    assert_eq!(updated.creation_date, created.creation_date);
    assert!(updated.latest_update_date > created.latest_update_date);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let gateways = setup().await;

    let envelope = gateways
        .systems
        .update(system("Sensor-A"), "missing-1")
        .await
        .unwrap();
    assert_eq!(envelope.code(), ResponseCode::NotFound);
}

#[tokio::test]
async fn test_invalid_requests_rejected() {
    let gateways = setup().await;

    let result = gateways.systems.update(system("Sensor-A"), "").await;
    assert!(matches!(result, Err(AppError::InvalidArgument(_))));

    let result = gateways.systems.create(system("")).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = gateways.vendors.retrieve_all(0, 0).await;
    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_delete_and_delete_all_notify_hooks() {
    let hook = Arc::new(RecordingHook::default());
    let hooks: Vec<Arc<dyn PersistenceHook>> = vec![hook.clone()];
    let gateways = Gateways::from_stores(Stores::relational(setup_db().await), &hooks);

    let created = gateways
        .systems
        .create(system("Sensor-A"))
        .await
        .unwrap()
        .into_response()
        .unwrap();
    gateways.systems.create(system("Sensor-B")).await.unwrap();

    let missing = gateways.systems.delete("missing-1").await.unwrap();
    assert_eq!(missing.code(), ResponseCode::NotFound);
    assert!(!missing.message().is_empty());

    let deleted = gateways.systems.delete(&created.id).await.unwrap();
    assert_eq!(deleted.code(), ResponseCode::Success);
    assert_eq!(
        gateways
            .systems
            .retrieve_by_id(&created.id)
            .await
            .unwrap()
            .code(),
        ResponseCode::NotFound
    );

    let wiped = gateways.systems.delete_all().await.unwrap();
    assert_eq!(wiped.code(), ResponseCode::Success);
    assert_eq!(
        gateways.systems.retrieve_all(0, 10).await.unwrap().code(),
        ResponseCode::NotFound
    );

    let events = hook.events.lock().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[2], format!("delete System {}", created.id));
    assert_eq!(events[3], "delete_all System 1");
}

#[tokio::test]
async fn test_seed_systems() {
    let gateways = setup().await;
    gateways.systems.create(system("Old")).await.unwrap();

    let created = model_repository_lib::seed_systems(gateways.systems.as_ref(), 4)
        .await
        .unwrap();
    assert_eq!(created, 4);

    let page = gateways.systems.retrieve_all(0, 10).await.unwrap();
    let items = page.list_of_responses().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|s| s.name.len() == 10 && s.name != "Old"));
}
