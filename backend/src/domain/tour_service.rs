//! Tour catalog service: listing, lookup, and search over the hotel-curated
//! tour catalog.

use anyhow::Result;
use log::{debug, info};
use shared::Tour;
use std::sync::Arc;

use crate::domain::catalog;
use crate::domain::commands::catalog::{
    GetTourQuery, GetTourResult, SearchToursQuery, SearchToursResult,
};

#[derive(Clone)]
pub struct TourService {
    tours: Arc<Vec<Tour>>,
}

impl TourService {
    /// Create a service over the seeded catalog.
    pub fn new() -> Self {
        let tours = catalog::seed_tours();
        info!("Loaded tour catalog with {} tours", tours.len());
        Self {
            tours: Arc::new(tours),
        }
    }

    pub fn list_tours(&self) -> Result<SearchToursResult> {
        debug!("Listing all {} tours", self.tours.len());
        Ok(SearchToursResult {
            tours: self.tours.as_ref().clone(),
        })
    }

    pub fn get_tour(&self, query: GetTourQuery) -> Result<GetTourResult> {
        let tour = self.tours.iter().find(|t| t.id == query.tour_id).cloned();
        if tour.is_none() {
            debug!("Tour not found: {}", query.tour_id);
        }
        Ok(GetTourResult { tour })
    }

    /// Case-insensitive substring search over title and description, with an
    /// optional category filter. An empty query matches everything.
    pub fn search_tours(&self, query: SearchToursQuery) -> Result<SearchToursResult> {
        let needle = query
            .query
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        let tours: Vec<Tour> = self
            .tours
            .iter()
            .filter(|tour| query.filter.accepts(tour.category))
            .filter(|tour| {
                needle.is_empty()
                    || tour.title.to_lowercase().contains(&needle)
                    || tour.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        info!(
            "Tour search '{}' (filter {:?}) matched {} tours",
            needle,
            query.filter,
            tours.len()
        );

        Ok(SearchToursResult { tours })
    }
}

impl Default for TourService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TourFilter;

    #[test]
    fn test_list_tours() {
        let service = TourService::new();
        let result = service.list_tours().unwrap();
        assert_eq!(result.tours.len(), 3);
    }

    #[test]
    fn test_get_tour() {
        let service = TourService::new();

        let found = service
            .get_tour(GetTourQuery {
                tour_id: "turkish-hamam".to_string(),
            })
            .unwrap();
        assert_eq!(found.tour.unwrap().title, "Turkish Hamam Tour");

        let missing = service
            .get_tour(GetTourQuery {
                tour_id: "no-such-tour".to_string(),
            })
            .unwrap();
        assert!(missing.tour.is_none());
    }

    #[test]
    fn test_search_by_title_case_insensitive() {
        let service = TourService::new();
        let result = service
            .search_tours(SearchToursQuery {
                query: Some("SULTAN".to_string()),
                filter: TourFilter::All,
            })
            .unwrap();
        assert_eq!(result.tours.len(), 1);
        assert_eq!(result.tours[0].id, "footsteps-of-the-sultan");
    }

    #[test]
    fn test_search_matches_description() {
        let service = TourService::new();
        let result = service
            .search_tours(SearchToursQuery {
                query: Some("relaxation".to_string()),
                filter: TourFilter::All,
            })
            .unwrap();
        assert_eq!(result.tours.len(), 1);
        assert_eq!(result.tours[0].id, "turkish-hamam");
    }

    #[test]
    fn test_search_with_category_filter() {
        let service = TourService::new();

        let historical = service
            .search_tours(SearchToursQuery {
                query: None,
                filter: TourFilter::Historical,
            })
            .unwrap();
        assert_eq!(historical.tours.len(), 1);
        assert_eq!(historical.tours[0].id, "footsteps-of-the-sultan");

        // Filter and query combine
        let none = service
            .search_tours(SearchToursQuery {
                query: Some("hamam".to_string()),
                filter: TourFilter::Historical,
            })
            .unwrap();
        assert!(none.tours.is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let service = TourService::new();
        let result = service.search_tours(SearchToursQuery::default()).unwrap();
        assert_eq!(result.tours.len(), 3);
    }
}
