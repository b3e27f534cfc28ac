pub(crate) mod request;
pub(crate) mod response;

pub use request::{validate_url, ScrapeRequest, INVALID_URL_MESSAGE};
pub use response::{
    Breadcrumb, ExtractedData, Faq, ImageRef, SchemaBundle, SchemaKind, SchemaResponse, ScrapeData,
};
