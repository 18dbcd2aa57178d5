//! Hotel list and current-hotel selection.
//!
//! The selected hotel scopes the rest of the session: bookings default their
//! pickup location to it and confirmations name it. Selection lives in
//! memory only.

use anyhow::Result;
use log::{debug, info};
use shared::Hotel;
use std::sync::{Arc, Mutex};

use crate::domain::catalog;
use crate::domain::commands::catalog::{
    SearchHotelsQuery, SearchHotelsResult, SelectHotelCommand, SelectHotelResult,
};

#[derive(Clone)]
pub struct HotelService {
    hotels: Arc<Vec<Hotel>>,
    selected_hotel_id: Arc<Mutex<Option<String>>>,
}

impl HotelService {
    pub fn new() -> Self {
        let hotels = catalog::seed_hotels();
        info!("Loaded hotel list with {} hotels", hotels.len());
        Self {
            hotels: Arc::new(hotels),
            selected_hotel_id: Arc::new(Mutex::new(None)),
        }
    }

    pub fn list_hotels(&self) -> Result<SearchHotelsResult> {
        Ok(SearchHotelsResult {
            hotels: self.hotels.as_ref().clone(),
        })
    }

    /// Case-insensitive name search; an empty query lists every hotel.
    pub fn search_hotels(&self, query: SearchHotelsQuery) -> Result<SearchHotelsResult> {
        let needle = query
            .query
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        let hotels: Vec<Hotel> = self
            .hotels
            .iter()
            .filter(|hotel| needle.is_empty() || hotel.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        debug!("Hotel search '{}' matched {} hotels", needle, hotels.len());

        Ok(SearchHotelsResult { hotels })
    }

    /// Set the hotel the session operates under.
    pub fn select_hotel(&self, command: SelectHotelCommand) -> Result<SelectHotelResult> {
        let hotel = self
            .hotels
            .iter()
            .find(|h| h.id == command.hotel_id)
            .cloned()
            .ok_or_else(|| crate::domain::error::DomainError::not_found("Hotel", &command.hotel_id))?;

        {
            let mut selected = self.selected_hotel_id.lock().unwrap();
            *selected = Some(hotel.id.clone());
        }

        info!("Selected hotel: {} ({})", hotel.name, hotel.id);

        Ok(SelectHotelResult { hotel })
    }

    /// The currently selected hotel, if any.
    pub fn selected_hotel(&self) -> Option<Hotel> {
        let selected = self.selected_hotel_id.lock().unwrap();
        selected
            .as_ref()
            .and_then(|id| self.hotels.iter().find(|h| &h.id == id).cloned())
    }
}

impl Default for HotelService {
    fn default() -> Self {
        Self::new()
    }
}
