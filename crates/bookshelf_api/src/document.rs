//! Resource document codec.
//!
//! Books travel as JSON:API style documents:
//!
//! ```text
//! { "data": { "type": "book", "id": "1",
//!             "attributes": { "isbn": .., "judul": .., "pengarang": .. },
//!             "links": { "self": "<base>/api/book/1" } } }
//! ```
//!
//! Lists wrap an array of resource objects and add `meta.total`; failures
//! use an `errors` array. Field order in the encoded JSON follows struct
//! declaration order.

use bookshelf_core::{Book, BookAttributes};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// JSON:API resource type name for books.
pub const RESOURCE_TYPE: &str = "book";

/// Media type attached to every document response.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// Collection path, relative to the base URL.
pub const COLLECTION_PATH: &str = "/api/book";

/// Attribute block as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAttributes {
    pub isbn: String,
    pub judul: String,
    pub pengarang: String,
}

impl From<BookAttributes> for WireAttributes {
    fn from(value: BookAttributes) -> Self {
        Self {
            isbn: value.isbn,
            judul: value.title,
            pengarang: value.author,
        }
    }
}

impl From<WireAttributes> for BookAttributes {
    fn from(value: WireAttributes) -> Self {
        BookAttributes::new(value.isbn, value.judul, value.pengarang)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceObject {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub attributes: WireAttributes,
    pub links: ResourceLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleDocument {
    pub data: ResourceObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMeta {
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDocument {
    pub data: Vec<ResourceObject>,
    pub meta: ListMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub title: String,
    pub status: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    /// Builds a document carrying exactly one error object.
    pub fn single(title: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorObject {
                title: title.into(),
                status: status.to_string(),
                detail: detail.into(),
            }],
        }
    }
}

// Incoming documents. `id` and unknown members are ignored.
#[derive(Debug, Deserialize)]
struct RequestDocument {
    data: RequestResource,
}

#[derive(Debug, Deserialize)]
struct RequestResource {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    attributes: WireAttributes,
}

/// Reason a request body is not a usable resource document.
#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
    TypeMismatch(String),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed resource document: {err}"),
            Self::TypeMismatch(kind) => write!(
                f,
                "resource type `{kind}` does not match expected `{RESOURCE_TYPE}`"
            ),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::TypeMismatch(_) => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Encodes books into documents and decodes submitted attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCodec {
    base_url: String,
}

impl ResourceCodec {
    /// Creates a codec that prefixes `self` links with `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn self_link(&self, id: impl Display) -> String {
        format!("{}{COLLECTION_PATH}/{id}", self.base_url)
    }

    pub fn resource(&self, book: &Book) -> ResourceObject {
        self.resource_with_id(book.id.to_string(), book.attributes())
    }

    pub fn single(&self, book: &Book) -> SingleDocument {
        SingleDocument {
            data: self.resource(book),
        }
    }

    /// Builds a single-resource document around an id exactly as the client
    /// sent it in the path, numeric or not.
    pub fn echo(&self, raw_id: &str, attributes: BookAttributes) -> SingleDocument {
        SingleDocument {
            data: self.resource_with_id(raw_id.to_string(), attributes),
        }
    }

    fn resource_with_id(&self, id: String, attributes: BookAttributes) -> ResourceObject {
        ResourceObject {
            kind: RESOURCE_TYPE,
            links: ResourceLinks {
                self_link: self.self_link(&id),
            },
            id,
            attributes: attributes.into(),
        }
    }

    pub fn list(&self, books: &[Book]) -> ListDocument {
        let data: Vec<ResourceObject> = books.iter().map(|book| self.resource(book)).collect();
        ListDocument {
            meta: ListMeta { total: data.len() },
            data,
        }
    }

    /// Decodes the attribute block of a create/update request body.
    ///
    /// # Errors
    /// - `DecodeError::Json` when the body is not JSON, lacks `data` or
    ///   `attributes`, or any of the three attributes is missing or not a string.
    /// - `DecodeError::TypeMismatch` when `data.type` names another resource.
    pub fn decode_attributes(&self, body: &[u8]) -> Result<BookAttributes, DecodeError> {
        let document: RequestDocument = serde_json::from_slice(body)?;
        if let Some(kind) = document.data.kind {
            if kind != RESOURCE_TYPE {
                return Err(DecodeError::TypeMismatch(kind));
            }
        }
        Ok(document.data.attributes.into())
    }
}
