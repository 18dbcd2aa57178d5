//! Transfer/taxi service catalog: listing, lookup, and search.

use anyhow::Result;
use log::{debug, info};
use shared::Service;
use std::sync::Arc;

use crate::domain::catalog;
use crate::domain::commands::catalog::{SearchServicesQuery, SearchServicesResult};

#[derive(Clone)]
pub struct ServiceCatalog {
    services: Arc<Vec<Service>>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        let services = catalog::seed_services();
        info!("Loaded service catalog with {} services", services.len());
        Self {
            services: Arc::new(services),
        }
    }

    pub fn get_service(&self, service_id: &str) -> Result<Option<Service>> {
        let service = self.services.iter().find(|s| s.id == service_id).cloned();
        if service.is_none() {
            debug!("Service not found: {}", service_id);
        }
        Ok(service)
    }

    /// Case-insensitive name search with an optional category filter.
    /// `category: None` lists every category.
    pub fn search_services(&self, query: SearchServicesQuery) -> Result<SearchServicesResult> {
        let needle = query
            .query
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        let services: Vec<Service> = self
            .services
            .iter()
            .filter(|service| {
                query
                    .category
                    .map(|category| service.category == category)
                    .unwrap_or(true)
            })
            .filter(|service| needle.is_empty() || service.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        info!(
            "Service search '{}' (category {:?}) matched {} services",
            needle,
            query.category,
            services.len()
        );

        Ok(SearchServicesResult { services })
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
