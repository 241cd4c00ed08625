//! MongoDB implementation of [`DeviceRecordRepository`].

use std::future::Future;

use mongodb::Collection;
use mongodb::bson::{Document, doc};

use rfidgate_app::ports::DeviceRecordRepository;
use rfidgate_domain::error::GatewayError;
use rfidgate_domain::record::DeviceRecord;
use rfidgate_domain::rfid::Rfid;

use crate::document::DeviceDocument;
use crate::error::MongoStorageError;

fn newest_first() -> Document {
    doc! { "_id": -1 }
}

fn decode(document: DeviceDocument) -> Result<DeviceRecord, GatewayError> {
    document
        .into_record()
        .map_err(|err| MongoStorageError::from(err).into())
}

/// MongoDB-backed device record repository.
#[derive(Clone)]
pub struct MongoDeviceRecordRepository {
    collection: Collection<DeviceDocument>,
}

impl MongoDeviceRecordRepository {
    /// Create a new repository over the given collection handle.
    #[must_use]
    pub fn new(collection: Collection<DeviceDocument>) -> Self {
        Self { collection }
    }
}

impl DeviceRecordRepository for MongoDeviceRecordRepository {
    fn find_latest(
        &self,
    ) -> impl Future<Output = Result<Option<DeviceRecord>, GatewayError>> + Send {
        let collection = self.collection.clone();
        async move {
            let found = collection
                .find_one(doc! {})
                .sort(newest_first())
                .await
                .map_err(MongoStorageError::from)?;

            found.map(decode).transpose()
        }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<DeviceRecord>, GatewayError>> + Send {
        let collection = self.collection.clone();
        async move {
            let mut cursor = collection
                .find(doc! {})
                .await
                .map_err(MongoStorageError::from)?;

            let mut records = Vec::new();
            while cursor.advance().await.map_err(MongoStorageError::from)? {
                let document = cursor
                    .deserialize_current()
                    .map_err(MongoStorageError::from)?;
                records.push(decode(document)?);
            }
            Ok(records)
        }
    }

    fn find_by_rfid(
        &self,
        rfid: &Rfid,
    ) -> impl Future<Output = Result<Option<DeviceRecord>, GatewayError>> + Send {
        let collection = self.collection.clone();
        let filter = doc! { "rfid": rfid.as_str() };
        async move {
            let found = collection
                .find_one(filter)
                .await
                .map_err(MongoStorageError::from)?;

            found.map(decode).transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    //! These run against a live server:
    //! `RFIDGATE_TEST_MONGODB_URL=mongodb://localhost:27017 cargo test -- --ignored`

    use std::time::Duration;

    use mongodb::bson::DateTime;
    use mongodb::bson::oid::ObjectId;

    use super::*;
    use crate::client::{Config, Store};

    async fn setup() -> (Store, MongoDeviceRecordRepository) {
        let url = std::env::var("RFIDGATE_TEST_MONGODB_URL")
            .expect("RFIDGATE_TEST_MONGODB_URL must point at a MongoDB server");
        let store = Config {
            url,
            database: "rfidgate_test".to_string(),
            collection: format!("devices_{}", ObjectId::new().to_hex()),
            connect_timeout: Duration::from_secs(5),
        }
        .connect()
        .await
        .unwrap();
        let repo = MongoDeviceRecordRepository::new(store.collection());
        (store, repo)
    }

    fn document(rfid: &str) -> DeviceDocument {
        DeviceDocument {
            id: ObjectId::new(),
            rfid: rfid.to_string(),
            weight: 10.0,
            height: 80.0,
            pict1_url: "https://img.example/1.jpg".to_string(),
            pict2_url: "https://img.example/2.jpg".to_string(),
            pict3_url: "https://img.example/3.jpg".to_string(),
            ingestion_timestamp: DateTime::now(),
        }
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB"]
    async fn should_return_none_and_empty_vec_when_collection_is_empty() {
        let (store, repo) = setup().await;

        assert!(repo.find_latest().await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());

        store.collection().drop().await.unwrap();
        store.close().await;
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB"]
    async fn should_query_latest_all_and_by_rfid() {
        let (store, repo) = setup().await;
        let first = document("TAG-A");
        let second = document("TAG-B");
        store
            .collection()
            .insert_many([first.clone(), second.clone()])
            .await
            .unwrap();

        let latest = repo.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.id.as_str(), second.id.to_hex());

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let rfid = Rfid::new("TAG-A").unwrap();
        let found = repo.find_by_rfid(&rfid).await.unwrap().unwrap();
        assert_eq!(found.id.as_str(), first.id.to_hex());

        let missing = Rfid::new("TAG123").unwrap();
        assert!(repo.find_by_rfid(&missing).await.unwrap().is_none());

        store.collection().drop().await.unwrap();
        store.close().await;
    }
}
