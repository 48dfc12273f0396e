//! ListFacetHandler - Query handler for the distinct-value listings.

use std::sync::Arc;

use crate::domain::profile::{
    unique_areas, unique_locations, unique_technologies, ProfileError,
};
use crate::ports::ProfileReader;

/// Which distinct values to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Areas,
    Cities,
    Technologies,
}

/// Query for the sorted distinct values of one facet.
#[derive(Debug, Clone, Copy)]
pub struct ListFacetQuery {
    pub facet: Facet,
}

/// Handler for listing areas, cities and technologies.
pub struct ListFacetHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListFacetHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListFacetQuery) -> Result<Vec<String>, ProfileError> {
        let profiles = self.reader.list_all().await?;
        Ok(match query.facet {
            Facet::Areas => unique_areas(&profiles),
            Facet::Cities => unique_locations(&profiles),
            Facet::Technologies => unique_technologies(&profiles),
        })
    }
}
