//! Integration tests for the airport importer, using a mock key-value store.

use std::fs;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tempfile::{tempdir, TempDir};
use tracing::subscriber::DefaultGuard;
use tracing::Level;

use airport_importer::marshal::Item;
use airport_importer::store::KeyValueStore;
use airport_importer::{AirportImporter, ImportError};

// Mock store recording every write
struct MockStore {
    writes: Mutex<Vec<(String, Item)>>,
    fail_on_call: Option<usize>,
}

impl MockStore {
    fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_on_call: None,
        }
    }

    fn failing_on_call(call: usize) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    fn iata_codes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(_, item)| match &item["iataCode"] {
                AttributeValue::S(code) => code.clone(),
                other => panic!("Unexpected iataCode attribute {:?}", other),
            })
            .collect()
    }
}

#[async_trait]
impl KeyValueStore for MockStore {
    async fn put_item(&self, table: &str, item: Item) -> Result<(), ImportError> {
        let mut writes = self.writes.lock().unwrap();
        writes.push((table.to_string(), item));

        if self.fail_on_call == Some(writes.len()) {
            return Err(ImportError::put_item("Mock ConditionalCheckFailedException"));
        }
        Ok(())
    }
}

// Log output captured in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route every log event of the current thread into a buffer
fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

/// Helper writing an airports file into a fresh directory
fn airports_file(contents: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("airports.json"), contents).unwrap();
    dir
}

fn create_test_importer(dir: &TempDir, store: Arc<MockStore>) -> AirportImporter {
    AirportImporter::new(store, dir.path().join("airports.json"), "GRAPHQL-AIRPORTS")
}

#[tokio::test]
async fn test_imports_every_record_in_file_order() {
    let dir = airports_file(
        r#"[
            {"iataCode": "WRO", "city": "Wrocław"},
            {"iataCode": "LHR", "city": "London"},
            {"iataCode": "JFK", "city": "New York"}
        ]"#,
    );
    let store = Arc::new(MockStore::new());
    let importer = create_test_importer(&dir, store.clone());

    let count = importer.run().await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(store.iata_codes(), vec!["WRO", "LHR", "JFK"]);
    assert!(store
        .writes
        .lock()
        .unwrap()
        .iter()
        .all(|(table, _)| table == "GRAPHQL-AIRPORTS"));
}

#[tokio::test]
async fn test_records_are_written_untransformed() {
    let dir = airports_file(r#"[{"iataCode": "WRO", "runways": 1, "hub": false}]"#);
    let store = Arc::new(MockStore::new());
    let importer = create_test_importer(&dir, store.clone());

    importer.run().await.unwrap();

    let writes = store.writes.lock().unwrap();
    let item = &writes[0].1;
    assert_eq!(item.len(), 3);
    assert_eq!(item["runways"], AttributeValue::N("1".to_string()));
    assert_eq!(item["hub"], AttributeValue::Bool(false));
}

#[tokio::test]
async fn test_empty_file_writes_nothing() {
    let dir = airports_file("[]");
    let store = Arc::new(MockStore::new());
    let importer = create_test_importer(&dir, store.clone());

    let count = importer.run().await.unwrap();

    assert_eq!(count, 0);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_put_failure_stops_import() {
    let dir = airports_file(r#"[{"iataCode": "WRO"}, {"iataCode": "LHR"}, {"iataCode": "JFK"}]"#);
    let store = Arc::new(MockStore::failing_on_call(2));
    let importer = create_test_importer(&dir, store.clone());

    let result = importer.run().await;

    assert!(matches!(result, Err(ImportError::PutItem(_))));
    assert_eq!(store.write_count(), 2);
    assert_eq!(store.iata_codes(), vec!["WRO", "LHR"]);
}

#[tokio::test]
async fn test_put_failure_is_left_to_the_caller_to_report() {
    let (logs, _guard) = capture_logs();
    let dir = airports_file(r#"[{"iataCode": "WRO"}]"#);
    let store = Arc::new(MockStore::failing_on_call(1));
    let importer = create_test_importer(&dir, store);

    let result = importer.run().await;

    assert!(matches!(result, Err(ImportError::PutItem(_))));
    let logs = logs.contents();
    assert!(logs.contains("Mock ConditionalCheckFailedException"));
    assert!(!logs.contains("ERROR"), "unexpected error-level log:\n{}", logs);
}

#[tokio::test]
async fn test_non_object_record_stops_import() {
    let dir = airports_file(r#"[{"iataCode": "WRO"}, "LHR", {"iataCode": "JFK"}]"#);
    let store = Arc::new(MockStore::new());
    let importer = create_test_importer(&dir, store.clone());

    let result = importer.run().await;

    assert!(matches!(result, Err(ImportError::Marshal { position: 1, .. })));
    assert_eq!(store.iata_codes(), vec!["WRO"]);
}

#[tokio::test]
async fn test_missing_file_fails_before_any_write() {
    let dir = tempdir().unwrap();
    let store = Arc::new(MockStore::new());
    let importer = create_test_importer(&dir, store.clone());

    let result = importer.run().await;

    assert!(matches!(result, Err(ImportError::FileRead { .. })));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_malformed_file_fails_before_any_write() {
    let dir = airports_file(r#"[{"iataCode": "WRO"},"#);
    let store = Arc::new(MockStore::new());
    let importer = create_test_importer(&dir, store.clone());

    let result = importer.run().await;

    assert!(matches!(result, Err(ImportError::Decode { .. })));
    assert_eq!(store.write_count(), 0);
}
