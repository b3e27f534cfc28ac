pub mod http_client;
pub mod mock_client;

mod client;
pub use client::SchemaClient;
pub use http_client::HttpSchemaClient;
pub use mock_client::{MockOutcome, MockReply, MockSchemaClient};
