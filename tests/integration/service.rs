//! WidgetService behavior exercised directly against a database,
//! without the HTTP layer.

use widgets_api::models::widget::WidgetPayload;
use widgets_api::service::WidgetService;

use crate::common::test_db;

fn payload(name: &str, number_of_parts: i32) -> WidgetPayload {
    WidgetPayload {
        name: name.to_string(),
        number_of_parts,
    }
}

#[tokio::test]
async fn create_then_get_returns_an_equal_record() {
    let (db, _dir) = test_db().await;
    let service = WidgetService::new(db);

    let created = service.create(&payload("Test Widget", 5)).await.unwrap();
    let fetched = service.get(created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn create_stamps_equal_timestamps() {
    let (db, _dir) = test_db().await;
    let service = WidgetService::new(db);

    let created = service.create(&payload("Gizmo", 3)).await.unwrap();

    assert_eq!(created.created_date, created.updated_date);
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let (db, _dir) = test_db().await;
    let service = WidgetService::new(db);

    assert_eq!(service.get(999).await.unwrap(), None);
}

#[tokio::test]
async fn update_preserves_created_date_and_advances_updated_date() {
    let (db, _dir) = test_db().await;
    let service = WidgetService::new(db);

    let created = service.create(&payload("Test Widget", 5)).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = service
        .update(created.id, &payload("Updated Widget", 10))
        .await
        .unwrap()
        .expect("widget should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Updated Widget");
    assert_eq!(updated.number_of_parts, 10);
    assert_eq!(updated.created_date, created.created_date);
    assert!(updated.updated_date > created.updated_date);
}

#[tokio::test]
async fn update_unknown_id_is_none_and_creates_nothing() {
    let (db, _dir) = test_db().await;
    let service = WidgetService::new(db);

    let result = service.update(999, &payload("Ghost", 1)).await.unwrap();

    assert_eq!(result, None);
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_reports_whether_a_record_was_removed() {
    let (db, _dir) = test_db().await;
    let service = WidgetService::new(db);

    let created = service.create(&payload("Doomed", 2)).await.unwrap();

    assert!(service.delete(created.id).await.unwrap());
    assert_eq!(service.get(created.id).await.unwrap(), None);
    assert!(!service.delete(created.id).await.unwrap());
    assert!(!service.delete(999).await.unwrap());
}

#[tokio::test]
async fn list_returns_widgets_in_insertion_order() {
    let (db, _dir) = test_db().await;
    let service = WidgetService::new(db);

    assert!(service.list().await.unwrap().is_empty());

    for i in 1..=3 {
        service.create(&payload(&format!("Widget {i}"), i)).await.unwrap();
    }

    let widgets = service.list().await.unwrap();
    assert_eq!(widgets.len(), 3);
    let ids: Vec<i32> = widgets.iter().map(|w| w.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}
