//! Module declaration and lifecycle: storage, services, clients and routes

use crate::api::http::HttpBankClient;
use crate::api::native::NativeClient;
use crate::api::rest::{openapi, routes, BancoCatalog, BankCatalog, CatalogDialect};
use crate::config::{Config, SelfQueryMode};
use crate::contract::{BankApi, Catalog};
use crate::domain::Service;
use crate::infra::storage::{migrations::Migrator, SeaOrmBankRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Bank service module
///
/// Owns one domain service per catalog, all backed by the same connection.
pub struct BankServiceModule {
    config: Config,
    db: Arc<DatabaseConnection>,
    bancos: Arc<Service>,
    banks: Arc<Service>,
}

impl BankServiceModule {
    /// Build repositories and domain services on top of `db`
    pub fn init(config: Config, db: DatabaseConnection) -> Result<Self> {
        if config.self_query.mode == SelfQueryMode::Http && config.self_query.base_url.is_none() {
            anyhow::bail!("self_query.mode = http requires self_query.base_url");
        }

        let db = Arc::new(db);
        let service_for = |catalog: Catalog| {
            let repo = Arc::new(SeaOrmBankRepository::new(db.clone(), catalog));
            Arc::new(Service::new(catalog, repo))
        };
        let bancos = service_for(Catalog::Banco);
        let banks = service_for(Catalog::Bank);

        tracing::info!(self_query = ?config.self_query.mode, "Bank service initialized");
        Ok(Self {
            config,
            db,
            bancos,
            banks,
        })
    }

    /// Apply pending database migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(self.db.as_ref(), None).await?;
        tracing::info!("Bank service migrations completed");
        Ok(())
    }

    /// Domain service of a catalog
    pub fn service(&self, catalog: Catalog) -> Arc<Service> {
        match catalog {
            Catalog::Banco => self.bancos.clone(),
            Catalog::Bank => self.banks.clone(),
        }
    }

    /// In-process client of a catalog
    pub fn client(&self, catalog: Catalog) -> Arc<dyn BankApi> {
        Arc::new(NativeClient::new(self.service(catalog)))
    }

    fn self_query_client<D: CatalogDialect>(&self) -> Result<Arc<dyn BankApi>> {
        match (&self.config.self_query.mode, &self.config.self_query.base_url) {
            (SelfQueryMode::Native, _) => Ok(self.client(D::CATALOG)),
            (SelfQueryMode::Http, Some(base_url)) => {
                Ok(Arc::new(HttpBankClient::<D>::new(base_url.clone())))
            }
            (SelfQueryMode::Http, None) => {
                anyhow::bail!("self_query.mode = http requires self_query.base_url")
            }
        }
    }

    /// Register the REST routes of both catalogs and the OpenAPI document
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering bank service REST routes");

        let router = routes::register_routes::<BancoCatalog>(
            router,
            self.service(Catalog::Banco),
            self.self_query_client::<BancoCatalog>()?,
        )?;
        let router = routes::register_routes::<BankCatalog>(
            router,
            self.service(Catalog::Bank),
            self.self_query_client::<BankCatalog>()?,
        )?;

        Ok(router.route(openapi::OPENAPI_PATH, axum::routing::get(openapi::openapi_json)))
    }
}
