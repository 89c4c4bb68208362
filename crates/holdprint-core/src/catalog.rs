//! In-memory route catalog with copy-on-write snapshots.
//!
//! A search must run over a frozen view of the routes. [`RouteCatalog`]
//! hands out that view as an `Arc<Vec<Route>>`: a reader clones the `Arc`
//! under a short read lock, and writers clone the vector only while a
//! snapshot is still alive (`Arc::make_mut`). A route deleted mid-search
//! therefore stays visible to that search and disappears from the next one.
//!
//! Persistence is not handled here; a storage collaborator seeds the catalog
//! with [`RouteCatalog::from_routes`] and saves [`RouteCatalog::snapshot`].

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::route::{LabeledImage, Route};

/// Thread-safe holder of the route collection.
#[derive(Debug, Default)]
pub struct RouteCatalog {
    routes: RwLock<Arc<Vec<Route>>>,
}

impl RouteCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with `routes`.
    #[must_use]
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self {
            routes: RwLock::new(Arc::new(routes)),
        }
    }

    /// Returns a frozen view of the current routes.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Route>> {
        Arc::clone(&*self.routes.read())
    }

    /// Consumes the catalog and returns its routes.
    #[must_use]
    pub fn into_routes(self) -> Vec<Route> {
        Arc::unwrap_or_clone(self.routes.into_inner())
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    /// Returns true if the catalog holds no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }

    /// Returns a copy of the route with `route_id`.
    #[must_use]
    pub fn get(&self, route_id: &str) -> Option<Route> {
        self.routes.read().iter().find(|r| r.id == route_id).cloned()
    }

    /// Creates an empty route named `name` and returns its id.
    pub fn add_route(&self, name: impl Into<String>) -> String {
        let route = Route::new(name);
        let id = route.id.clone();
        self.insert(route);
        id
    }

    /// Appends a fully built route.
    pub fn insert(&self, route: Route) {
        tracing::debug!(route_id = %route.id, name = %route.name, "route added");
        let mut guard = self.routes.write();
        Arc::make_mut(&mut *guard).push(route);
    }

    /// Adds a reference image to a route and returns the new image id.
    ///
    /// The normalized fingerprint is computed here, once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteNotFound`] if no route has `route_id`.
    pub fn add_image(
        &self,
        route_id: &str,
        photo_ref: impl Into<String>,
        points: Vec<Point>,
    ) -> Result<String> {
        let image = LabeledImage::new(photo_ref, points);
        let image_id = image.id.clone();

        let mut guard = self.routes.write();
        let route = Arc::make_mut(&mut *guard)
            .iter_mut()
            .find(|r| r.id == route_id)
            .ok_or_else(|| Error::RouteNotFound(route_id.to_string()))?;

        tracing::debug!(route_id, image_id = %image_id, points = image.len(), "image added");
        route.add_image(image);
        Ok(image_id)
    }

    /// Removes a route and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteNotFound`] if no route has `route_id`.
    pub fn delete_route(&self, route_id: &str) -> Result<Route> {
        let mut guard = self.routes.write();
        let routes = Arc::make_mut(&mut *guard);
        let pos = routes
            .iter()
            .position(|r| r.id == route_id)
            .ok_or_else(|| Error::RouteNotFound(route_id.to_string()))?;

        tracing::debug!(route_id, "route deleted");
        Ok(routes.remove(pos))
    }

    /// Removes one image from a route and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteNotFound`] or [`Error::ImageNotFound`].
    pub fn delete_image(&self, route_id: &str, image_id: &str) -> Result<LabeledImage> {
        let mut guard = self.routes.write();
        let route = Arc::make_mut(&mut *guard)
            .iter_mut()
            .find(|r| r.id == route_id)
            .ok_or_else(|| Error::RouteNotFound(route_id.to_string()))?;

        route
            .remove_image(image_id)
            .ok_or_else(|| Error::ImageNotFound {
                route_id: route_id.to_string(),
                image_id: image_id.to_string(),
            })
    }
}
