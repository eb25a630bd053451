//! Document entity - A file uploaded to a space

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::DomainError;
use crate::value_objects::{DocumentId, SpaceId, TenantId, UserId};

/// Filename extensions accepted for upload
const ALLOWED_EXTENSIONS: [&str; 4] = [".pdf", ".docx", ".txt", ".md"];

/// Document processing status
///
/// Pending → Processing → Indexed | Failed; Deleted is a soft-delete
/// terminal state reachable from anywhere. Transitions are not guarded at
/// this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Uploaded, not yet indexed
    Pending,
    /// Being chunked and embedded
    Processing,
    /// Ready for queries
    Indexed,
    /// Processing failed
    Failed,
    /// Soft-deleted
    Deleted,
}

/// Document classification type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Policy,
    Jurisprudence,
    Guidance,
    Faq,
    Other,
}

/// Document metadata extracted during indexing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,
    /// Document language (en, fr)
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    pub tags: Vec<String>,
    pub custom_fields: HashMap<String, serde_json::Value>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            author: None,
            publication_date: None,
            effective_date: None,
            language: "en".to_string(),
            page_count: None,
            tags: Vec::new(),
            custom_fields: HashMap::new(),
        }
    }
}

/// Document entity (owned by a space by reference)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier
    pub id: DocumentId,
    /// Parent space
    pub space_id: SpaceId,
    /// Tenant isolation
    pub tenant_id: TenantId,
    /// Original filename
    pub filename: String,
    /// MIME type
    pub content_type: String,
    /// File size in bytes
    pub size_bytes: u64,
    /// SHA-256 hash for tenant-wide deduplication
    pub content_hash: String,
    /// Blob storage location
    pub storage_url: String,
    /// Classification
    pub document_type: DocumentType,
    /// Processing status
    pub status: DocumentStatus,
    /// Metadata extracted during indexing
    pub metadata: DocumentMetadata,
    /// Number of chunks created during indexing
    pub chunk_count: u32,
    /// When indexing completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<DateTime<Utc>>,
    /// User who uploaded the file
    pub uploaded_by: UserId,
    /// When the document was created
    pub created_at: DateTime<Utc>,
    /// When the document was last updated
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Create a new pending document
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the filename is empty, longer
    /// than 255 characters, or does not end in an allowed extension, or if
    /// `size_bytes` is zero.
    pub fn new(
        space_id: SpaceId,
        tenant_id: TenantId,
        filename: impl Into<String>,
        size_bytes: u64,
        content_hash: impl Into<String>,
        storage_url: impl Into<String>,
        uploaded_by: UserId,
    ) -> Result<Self, DomainError> {
        let filename = filename.into();
        if filename.is_empty() || filename.chars().count() > 255 {
            return Err(DomainError::validation(
                "filename must be 1-255 characters",
            ));
        }
        if !extension_is_allowed(&filename) {
            return Err(DomainError::validation(format!(
                "invalid file extension, allowed: {}",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }
        if size_bytes == 0 {
            return Err(DomainError::validation("size_bytes must be positive"));
        }

        let now = Utc::now();
        Ok(Self {
            id: DocumentId::new(),
            space_id,
            tenant_id,
            filename,
            content_type: "application/pdf".to_string(),
            size_bytes,
            content_hash: content_hash.into(),
            storage_url: storage_url.into(),
            document_type: DocumentType::Other,
            status: DocumentStatus::Pending,
            metadata: DocumentMetadata::default(),
            chunk_count: 0,
            indexed_at: None,
            uploaded_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set the classification
    #[must_use]
    pub fn with_document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }

    /// Set the MIME type
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// SHA-256 hex digest of raw content, used at upload and dedup lookup
    pub fn compute_content_hash(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }

    /// Check whether this document duplicates another by content hash
    pub fn is_duplicate(&self, other_hash: &str) -> bool {
        self.content_hash == other_hash
    }

    /// Mark as being chunked and embedded
    pub fn mark_as_processing(&mut self) {
        self.status = DocumentStatus::Processing;
        self.updated_at = Utc::now();
    }

    /// Mark as successfully indexed, recording the chunk count
    ///
    /// Callable from any prior status; the permissive transition is part of
    /// the contract at this layer.
    pub fn mark_as_indexed(&mut self, chunk_count: u32) {
        let now = Utc::now();
        self.status = DocumentStatus::Indexed;
        self.chunk_count = chunk_count;
        self.indexed_at = Some(now);
        self.updated_at = now;
    }

    /// Mark processing as failed
    pub fn mark_as_failed(&mut self) {
        self.status = DocumentStatus::Failed;
        self.updated_at = Utc::now();
    }

    /// Soft-delete the document
    pub fn mark_as_deleted(&mut self) {
        self.status = DocumentStatus::Deleted;
        self.updated_at = Utc::now();
    }
}

fn extension_is_allowed(filename: &str) -> bool {
    let lowered = filename.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}
