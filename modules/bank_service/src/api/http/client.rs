//! HTTP client implementation - calls a bank catalog over its REST API
//!
//! Used by the self-query endpoint in `http` mode, and by other processes
//! that need typed access to a remote bank service.

use crate::api::rest::{dto::CatalogDialect, error::ErrorBody};
use crate::contract::{Bank, BankApi, BankError, BankInput, Catalog};
use crate::domain::validation::parse_violations;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::marker::PhantomData;

/// What a failed call was about, used to rebuild the domain error
#[derive(Debug, Clone, Copy)]
enum Subject<'a> {
    Collection,
    Id(i64),
    Code(&'a str),
    IdAndCode(i64, &'a str),
}

impl Subject<'_> {
    fn id(self) -> Option<i64> {
        match self {
            Self::Id(id) | Self::IdAndCode(id, _) => Some(id),
            Self::Collection | Self::Code(_) => None,
        }
    }

    fn code(self) -> Option<String> {
        match self {
            Self::Code(code) | Self::IdAndCode(_, code) => Some(code.to_string()),
            Self::Collection | Self::Id(_) => None,
        }
    }
}

/// Bank API client for catalog `D` over HTTP
///
/// No retries and no timeout beyond the reqwest defaults.
pub struct HttpBankClient<D: CatalogDialect> {
    http: reqwest::Client,
    base_url: String,
    _dialect: PhantomData<fn() -> D>,
}

impl<D: CatalogDialect> HttpBankClient<D> {
    /// Create a client for the service at `base_url` (scheme, host and port)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            _dialect: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, D::CATALOG.base_path())
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn transport_error(&self, error: reqwest::Error) -> BankError {
        tracing::warn!(catalog = %D::CATALOG, base_url = %self.base_url, error = %error, "bank API call failed");
        BankError::Internal
    }

    /// Rebuild the domain error from a non-success response
    async fn error_from(&self, response: Response, subject: Subject<'_>) -> BankError {
        let catalog = D::CATALOG;
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();

        match (status, subject.id(), subject.code()) {
            (StatusCode::NOT_FOUND, Some(id), _) => BankError::NotFound { catalog, id },
            (StatusCode::CONFLICT, _, Some(code)) => BankError::DuplicateCode { catalog, code },
            (StatusCode::BAD_REQUEST, _, _) => BankError::Validation {
                catalog,
                violations: parse_violations(catalog, &message),
            },
            _ => {
                tracing::warn!(%catalog, %status, body = %message, "unexpected bank API response");
                BankError::Internal
            }
        }
    }

    async fn read_record(&self, response: Response) -> Result<Bank, BankError> {
        let record = response
            .json::<D::Record>()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(record.into())
    }
}

#[async_trait]
impl<D: CatalogDialect> BankApi for HttpBankClient<D> {
    fn catalog(&self) -> Catalog {
        D::CATALOG
    }

    async fn list_banks(&self) -> Result<Vec<Bank>, BankError> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(self.error_from(response, Subject::Collection).await);
        }

        let records = response
            .json::<Vec<D::Record>>()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn get_bank(&self, id: i64) -> Result<Bank, BankError> {
        let response = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(self.error_from(response, Subject::Id(id)).await);
        }
        self.read_record(response).await
    }

    async fn create_bank(&self, input: BankInput) -> Result<Bank, BankError> {
        let code = input.code.clone();
        let body: D::Request = input.into();
        let response = self
            .http
            .post(self.collection_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(self.error_from(response, Subject::Code(&code)).await);
        }
        self.read_record(response).await
    }

    async fn update_bank(&self, id: i64, input: BankInput) -> Result<Bank, BankError> {
        let code = input.code.clone();
        let body: D::Request = input.into();
        let response = self
            .http
            .put(self.item_url(id))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(self.error_from(response, Subject::IdAndCode(id, &code)).await);
        }
        self.read_record(response).await
    }

    async fn delete_bank(&self, id: i64) -> Result<(), BankError> {
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(self.error_from(response, Subject::Id(id)).await);
        }
        Ok(())
    }
}
