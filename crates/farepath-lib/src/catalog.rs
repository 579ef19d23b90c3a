//! In-memory route catalog.
//!
//! The catalog is the edge store the search engine reads from. It assigns
//! numeric ids, enforces the `cost > 0` and non-empty code invariants before a
//! route is admitted, and can be seeded from a CSV file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Edge, NodeId};
use crate::routing::{search, SearchOutcome};

/// Identifier assigned to a catalog entry.
pub type RouteId = u64;

/// Stored route between two location codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub origin: NodeId,
    pub destination: NodeId,
    pub cost: u64,
}

impl Route {
    pub fn to_edge(&self) -> Edge {
        Edge::new(self.origin.clone(), self.destination.clone(), self.cost)
    }
}

/// Unvalidated route data as submitted by a caller or read from CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoute {
    pub origin: String,
    pub destination: String,
    pub cost: i64,
}

impl NewRoute {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, cost: i64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }

    /// Check the invariants the search engine relies on and return the
    /// normalized `(origin, destination, cost)` triple.
    fn validate(&self) -> Result<(NodeId, NodeId, u64)> {
        let origin = self.origin.trim();
        if origin.is_empty() {
            return Err(Error::InvalidRoute {
                message: "origin must not be empty".to_string(),
            });
        }

        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(Error::InvalidRoute {
                message: "destination must not be empty".to_string(),
            });
        }

        let cost = u64::try_from(self.cost)
            .ok()
            .filter(|cost| *cost > 0)
            .ok_or_else(|| Error::InvalidRoute {
                message: format!("cost must be greater than zero (got {})", self.cost),
            })?;

        Ok((origin.to_string(), destination.to_string(), cost))
    }
}

/// Collection of routes keyed by id.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: BTreeMap<RouteId, Route>,
    next_id: RouteId,
    source: Option<PathBuf>,
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self {
            routes: BTreeMap::new(),
            next_id: 1,
            source: None,
        }
    }
}

impl RouteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            routes = catalog.len(),
            "route catalog loaded"
        );
        Ok(catalog)
    }

    /// Load a catalog from CSV data with `origin`, `destination` and `cost`
    /// columns. Header matching is case-insensitive and accepts a few
    /// synonyms (`from`/`to`/`price`, `origem`/`destino`/`custo`).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::RouteDataValidation {
                message: format!("failed to read route headers: {err}"),
            })?
            .clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };

        let synonyms: &[(&str, &[&str])] = &[
            ("origin", &["origin", "from", "origem", "source"]),
            ("destination", &["destination", "to", "destino", "target"]),
            ("cost", &["cost", "price", "custo", "valor"]),
        ];

        let mut index_map: HashMap<&str, usize> = HashMap::new();
        for (canon, alts) in synonyms {
            if let Some(index) = headers
                .iter()
                .position(|header| alts.contains(&normalize(header).as_str()))
            {
                index_map.insert(*canon, index);
            }
        }

        let missing: Vec<&str> = synonyms
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|canon| !index_map.contains_key(canon))
            .collect();
        if !missing.is_empty() {
            return Err(Error::RouteDataValidation {
                message: format!(
                    "route data missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut catalog = Self::new();
        for (offset, result) in csv_reader.records().enumerate() {
            // Header occupies line 1.
            let row = offset + 2;
            let record = result?;
            let get = |field: &str| {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(str::to_string)
                    .unwrap_or_default()
            };

            let cost = get("cost")
                .parse::<i64>()
                .map_err(|err| Error::RouteDataValidation {
                    message: format!("invalid cost at row {row}: {err}"),
                })?;

            catalog
                .add(NewRoute::new(get("origin"), get("destination"), cost))
                .map_err(|err| Error::RouteDataValidation {
                    message: format!("row {row}: {err}"),
                })?;
        }

        Ok(catalog)
    }

    /// Admit a new route and assign it the next id.
    pub fn add(&mut self, route: NewRoute) -> Result<Route> {
        let (origin, destination, cost) = route.validate()?;
        let id = self.next_id;
        self.next_id += 1;

        let route = Route {
            id,
            origin,
            destination,
            cost,
        };
        self.routes.insert(id, route.clone());
        tracing::debug!(id, origin = %route.origin, destination = %route.destination, cost, "route added");
        Ok(route)
    }

    /// Replace the data of an existing route, keeping its id.
    pub fn update(&mut self, id: RouteId, route: NewRoute) -> Result<Route> {
        let (origin, destination, cost) = route.validate()?;
        let entry = self
            .routes
            .get_mut(&id)
            .ok_or(Error::RouteIdNotFound { id })?;

        entry.origin = origin;
        entry.destination = destination;
        entry.cost = cost;
        tracing::debug!(id, "route updated");
        Ok(entry.clone())
    }

    /// Remove a route, returning the removed entry.
    pub fn delete(&mut self, id: RouteId) -> Result<Route> {
        let removed = self
            .routes
            .remove(&id)
            .ok_or(Error::RouteIdNotFound { id })?;
        tracing::debug!(id, "route deleted");
        Ok(removed)
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(&id)
    }

    /// All routes in id order.
    pub fn routes(&self) -> Vec<&Route> {
        self.routes.values().collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Snapshot of every stored route as search edges, in id order.
    pub fn edges(&self) -> Vec<Edge> {
        self.routes.values().map(Route::to_edge).collect()
    }

    /// Run a least-cost search over the current contents.
    pub fn search(&self, origin: &str, destination: &str) -> Result<SearchOutcome> {
        search(&self.edges(), origin, destination)
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ids_are_assigned_sequentially() {
        let mut catalog = RouteCatalog::new();
        let first = catalog.add(NewRoute::new("AAA", "BBB", 1)).unwrap();
        let second = catalog.add(NewRoute::new("BBB", "CCC", 2)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut catalog = RouteCatalog::new();
        let first = catalog.add(NewRoute::new("AAA", "BBB", 1)).unwrap();
        catalog.delete(first.id).unwrap();
        let next = catalog.add(NewRoute::new("AAA", "BBB", 1)).unwrap();

        assert_eq!(next.id, 2);
    }

    #[test]
    fn codes_are_trimmed() {
        let mut catalog = RouteCatalog::new();
        let route = catalog.add(NewRoute::new(" AAA ", "BBB\t", 3)).unwrap();
        assert_eq!(route.origin, "AAA");
        assert_eq!(route.destination, "BBB");
    }

    #[test]
    fn portuguese_headers_are_accepted() {
        let csv = "Origem,Destino,Custo\nGRU,BRC,10\n";
        let catalog = RouteCatalog::from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().cost, 10);
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "origin,destination\nGRU,BRC\n";
        let error = RouteCatalog::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(error.to_string().contains("cost"));
    }
}
