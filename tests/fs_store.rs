use shelf::error::ShelfError;
use shelf::model::Product;
use shelf::store::fs::FileStore;
use shelf::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("inventory.json"));
    (dir, store)
}

fn sample(id: i64) -> Product {
    Product::new(id, "Pen", "Ballpoint pen", 2.0, 0.1, 10)
}

#[test]
fn test_missing_file_is_an_empty_collection() {
    let (_dir, store) = setup();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_blank_file_is_an_empty_collection() {
    let (_dir, store) = setup();
    fs::write(store.path(), "  \n\t ").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_garbage_content_is_corrupt_data() {
    let (_dir, store) = setup();
    fs::write(store.path(), "{not json at all").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, ShelfError::CorruptData(_)));
}

#[test]
fn test_wrong_shape_is_corrupt_data() {
    let (_dir, store) = setup();
    // Valid JSON, but an object instead of the expected array
    fs::write(store.path(), r#"{"id": 1}"#).unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, ShelfError::CorruptData(_)));
}

#[test]
fn test_save_then_load_round_trips() {
    let (_dir, mut store) = setup();
    let products = vec![sample(1), sample(2)];

    store.save(&products).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, products);
}

#[test]
fn test_save_load_save_is_idempotent() {
    let (_dir, mut store) = setup();
    store.save(&[sample(1), sample(2)]).unwrap();

    let first_pass = store.load().unwrap();
    store.save(&first_pass).unwrap();
    let second_pass = store.load().unwrap();

    assert_eq!(second_pass, first_pass);
}

#[test]
fn test_save_replaces_prior_content_entirely() {
    let (_dir, mut store) = setup();
    store.save(&[sample(1), sample(2), sample(3)]).unwrap();

    store.save(&[sample(7)]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 7);

    // The longer prior content must be fully gone from disk
    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(!raw.contains("\"id\": 2"));
}

#[test]
fn test_save_leaves_no_scratch_files() {
    let (dir, mut store) = setup();
    store.save(&[sample(1)]).unwrap();

    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("nested").join("deeper").join("inventory.json"));

    store.save(&[sample(1)]).unwrap();

    assert!(store.path().exists());
    assert_eq!(store.load().unwrap().len(), 1);

    // Saving again with the directory already present must stay silent
    store.save(&[sample(1), sample(2)]).unwrap();
    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn test_load_decodes_a_hand_written_file() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        r#"[{
            "id": 1,
            "name": "Pen",
            "description": "Ballpoint pen",
            "price": 2.0,
            "discount": 0.1,
            "quantity": 10,
            "createdAt": "2024-01-15T10:30:00Z"
        }]"#,
    )
    .unwrap();

    let products = store.load().unwrap();
    assert_eq!(products.len(), 1);

    let product = &products[0];
    assert_eq!(product.id, 1);
    assert_eq!(product.name, "Pen");
    assert_eq!(product.quantity, 10);
    assert_eq!(product.final_price(), 1.80);
}
