//! Drives [`HttpInventoryApi`] against a small in-process inventory service.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use stockroom_lib::{
    EquipmentForm, Error, HttpInventoryApi, InventoryApi, Notice, Session,
    draft::{EditMode, Field},
    model::{Asset, AssetId, AssetPayload, Branch, BranchId, Group, GroupId},
};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Default)]
struct Store {
    assets: Vec<Asset>,
    next_id: i64,
}

type Shared = Arc<Mutex<Store>>;

/// The record the service keeps for `payload`, joined with its group name.
fn stored(id: AssetId, payload: AssetPayload) -> Asset {
    Asset {
        id,
        branch_id: payload.branch_id,
        branch_name: payload.branch_name,
        group_id: payload.group_id,
        desktop_name: payload.desktop_name,
        configuration: payload.configuration,
        tag_name: payload.tag_name,
        warranty: payload.warranty,
        price: payload.price,
        purchase_date: payload.purchase_date,
        status: payload.status,
        asset_get_by: payload.asset_get_by,
        serial_number: payload.serial_number,
        group_name: "ICT Desk".into(),
        sub_branch: payload.sub_branch,
    }
}

async fn list_assets(State(store): State<Shared>) -> Json<Vec<Asset>> {
    Json(store.lock().await.assets.clone())
}

async fn create_asset(State(store): State<Shared>, Json(payload): Json<AssetPayload>) -> StatusCode {
    let mut store = store.lock().await;
    store.next_id += 1;
    let id = AssetId(store.next_id);
    store.assets.push(stored(id, payload));
    StatusCode::CREATED
}

async fn update_asset(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(payload): Json<AssetPayload>,
) -> StatusCode {
    let mut store = store.lock().await;
    match store.assets.iter_mut().find(|a| a.id == AssetId(id)) {
        Some(asset) => {
            *asset = stored(AssetId(id), payload);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_asset(State(store): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    store.lock().await.assets.retain(|a| a.id != AssetId(id));
    StatusCode::NO_CONTENT
}

async fn list_branches() -> Json<Vec<Branch>> {
    Json(vec![
        Branch {
            branch_id: BranchId(1),
            branch_name: "Head Office".into(),
        },
        Branch {
            branch_id: BranchId(2),
            branch_name: "Motijheel".into(),
        },
    ])
}

async fn list_groups() -> Json<Vec<Group>> {
    Json(vec![Group {
        group_id: GroupId(4),
        group_name: "ICT Desk".into(),
        branch_id: BranchId(1),
    }])
}

/// Start the service on an ephemeral port and return its API base URL.
async fn serve() -> (String, Shared) {
    let store = Shared::default();
    let app = Router::new()
        .route("/api/assets", get(list_assets).post(create_asset))
        .route("/api/assets/{id}", put(update_asset).delete(delete_asset))
        .route("/api/branches", get(list_branches))
        .route("/api/groups", get(list_groups))
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), store)
}

fn fill_in(form: &mut EquipmentForm, desktop_name: &str) {
    for (field, value) in [
        (Field::DesktopName, desktop_name),
        (Field::Configuration, "i7 / 32GB / 1TB"),
        (Field::TagName, "HO-ICT-0001"),
        (Field::Warranty, "3 years"),
        (Field::Price, "120000"),
        (Field::PurchaseDate, "2024-09-15"),
        (Field::Status, "Active"),
        (Field::AssetGetBy, "Procurement"),
        (Field::SerialNumber, "5CG1234XYZ"),
    ] {
        form.set_field(field, value);
    }
}

#[tokio::test]
async fn test_create_edit_delete() {
    let (url, store) = serve().await;
    let api = HttpInventoryApi::new(url);

    let mut form = EquipmentForm::new(Session::new(Some("1"), Some("superadmin")));
    form.initialize(&api).await;

    assert_eq!(form.branches().len(), 2);
    assert_eq!(form.groups().len(), 1);
    assert_eq!(form.draft().get(Field::BranchName), "Head Office");
    assert_eq!(
        form.draft().get(Field::SubBranch),
        "Chairman Sir & MD & CEO Office"
    );

    fill_in(&mut form, "HO-ICT-01");
    assert!(form.select_group(GroupId(4)));
    assert!(form.select_sub_branch("ICT"));

    let notice = form.submit(&api).await.unwrap();
    assert_eq!(notice, Some(Notice::AssetAdded));
    assert!(form.draft().is_empty());

    let created = form.assets().first().cloned().unwrap();
    assert_eq!(created.desktop_name, "HO-ICT-01");
    assert_eq!(created.sub_branch, "ICT");
    assert_eq!(created.group_name, "ICT Desk");
    assert_eq!(created.price, 120000.0);

    form.edit(&created);
    form.set_field(Field::Status, "Retired");
    let notice = form.submit(&api).await.unwrap();
    assert_eq!(notice, Some(Notice::AssetUpdated));
    assert_eq!(form.mode(), EditMode::Create);
    assert_eq!(
        form.assets().first().map(|a| a.status.as_str()),
        Some("Retired")
    );

    form.delete(&api, created.id).await.unwrap();
    assert!(form.assets().is_empty());
    assert!(store.lock().await.assets.is_empty());
}

#[tokio::test]
async fn test_server_error() {
    let (url, _store) = serve().await;
    let api = HttpInventoryApi::new(url);

    let payload = AssetPayload {
        branch_id: BranchId(2),
        branch_name: "Motijheel".into(),
        group_id: GroupId(4),
        desktop_name: "MJ-01".into(),
        configuration: "i3".into(),
        tag_name: "T".into(),
        warranty: "1 year".into(),
        price: 1.0,
        purchase_date: "2024-01-01".into(),
        status: "Active".into(),
        asset_get_by: "Vendor".into(),
        serial_number: "S".into(),
        sub_branch: "N/A".into(),
    };

    match api.update_asset(AssetId(99), &payload).await {
        Err(Error::Server { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected a 404, got {other:?}"),
    }
}

#[tokio::test]
async fn test_scoped_session_over_http() {
    let (url, _store) = serve().await;
    let api = HttpInventoryApi::new(url);

    let mut form = EquipmentForm::new(Session::new(Some("2"), Some("teller")));
    form.initialize(&api).await;

    assert_eq!(form.branches().len(), 1);
    assert_eq!(form.draft().get(Field::BranchName), "Motijheel");
    assert_eq!(form.sub_branch_options(), ["N/A"]);
}
