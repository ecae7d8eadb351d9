//! MongoDB-backed document source

use crate::StoreError;
use mongodb::bson::{doc, Document};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::sync::{Client, Collection};
use porous_domain::{DocumentSource, Documents, MaterialDocument, PROJECTED_FIELDS};
use tracing::{debug, info};

/// Reads every document of one collection
///
/// The connection is verified with a `ping` when the source is created, so
/// an unreachable server fails before any report output is produced.
pub struct MongoSource {
    client: Client,
    database: String,
    collection: String,
}

impl MongoSource {
    /// Connect to `server` and target `database.collection`
    ///
    /// `server` is either a bare host (`localhost`, `db1:27018`) or a full
    /// `mongodb://` / `mongodb+srv://` URI.
    pub fn connect(server: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let uri = connection_uri(server);
        let client = Client::with_uri_str(&uri)
            .map_err(|e| StoreError::Connection(format!("{}: {}", server, e)))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(|e| StoreError::Connection(format!("{}: {}", server, e)))?;

        info!("Connected to MongoDB at {}", server);

        Ok(Self {
            client,
            database: database.to_string(),
            collection: collection.to_string(),
        })
    }

    /// Name of the queried namespace, `database.collection`
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }

    fn collection(&self) -> Collection<MaterialDocument> {
        self.client
            .database(&self.database)
            .collection(&self.collection)
    }
}

impl DocumentSource for MongoSource {
    type Error = StoreError;

    fn documents(&mut self) -> Result<Documents<'_, StoreError>, StoreError> {
        debug!("Querying {} with projection {:?}", self.namespace(), PROJECTED_FIELDS);

        let cursor = self
            .collection()
            .find(doc! {})
            .projection(projection())
            .run()
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(Box::new(cursor.map(|item| item.map_err(cursor_error))))
    }
}

/// Build a connection URI from a host or URI argument
pub fn connection_uri(server: &str) -> String {
    if server.starts_with("mongodb://") || server.starts_with("mongodb+srv://") {
        server.to_string()
    } else {
        format!("mongodb://{}", server)
    }
}

/// Projection selecting only the report's top-level fields
pub fn projection() -> Document {
    let mut projection = Document::new();
    for field in PROJECTED_FIELDS {
        projection.insert(field, 1);
    }
    projection
}

fn cursor_error(e: MongoError) -> StoreError {
    match *e.kind {
        ErrorKind::BsonDeserialization(_) => StoreError::Decode(e.to_string()),
        _ => StoreError::Query(e.to_string()),
    }
}
