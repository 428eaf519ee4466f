use std::collections::HashMap;

use crate::core::{
    distance::nearest_aisle,
    filters::sanitize_items,
    matcher::Matcher,
};
use crate::models::{CatalogEntry, MatchResult, Route, RouteEntry, StoreLayout};

/// Shopping route builder
///
/// # Pipeline Stages
/// 1. Input validation (blank items dropped, the rest trimmed)
/// 2. Per-item aisle matching
/// 3. Grouping by aisle, de-duplicated by exact string
/// 4. Greedy nearest-neighbour ordering of the aisles
#[derive(Debug, Clone, Default)]
pub struct Router {
    matcher: Matcher,
    layout: StoreLayout,
}

impl Router {
    pub fn new(matcher: Matcher, layout: StoreLayout) -> Self {
        Self { matcher, layout }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Build the shopping route for `items` against one store catalog
    ///
    /// Never fails: an empty catalog leaves every valid item unmatched and an
    /// empty item list yields an empty route.
    pub fn build_route<S: AsRef<str>>(&self, items: &[S], catalog: &[CatalogEntry]) -> Route {
        let items = sanitize_items(items);

        let mut groups: Vec<RouteEntry> = Vec::new();
        let mut group_index: HashMap<u32, usize> = HashMap::new();
        let mut unmatched: Vec<String> = Vec::new();

        for item in items {
            match self.matcher.match_item(&item, catalog) {
                MatchResult::Matched { item, aisle_id, .. } => {
                    let idx = *group_index.entry(aisle_id).or_insert_with(|| {
                        groups.push(RouteEntry {
                            aisle_id,
                            items: Vec::new(),
                        });
                        groups.len() - 1
                    });

                    let group = &mut groups[idx];
                    if !group.items.contains(&item) {
                        group.items.push(item);
                    }
                }
                MatchResult::Unmatched { item } => {
                    if !unmatched.contains(&item) {
                        unmatched.push(item);
                    }
                }
            }
        }

        let route = Route {
            entries: self.order_entries(groups),
            unmatched,
        };

        tracing::debug!(
            "Built route through {} aisles ({} items matched, {} unmatched)",
            route.entries.len(),
            route.matched_count(),
            route.unmatched.len()
        );

        route
    }

    /// Order aisle groups by walking proximity
    ///
    /// Starts at the first group (the aisle matched first) and repeatedly
    /// moves to the nearest remaining aisle.
    pub fn order_entries(&self, mut groups: Vec<RouteEntry>) -> Vec<RouteEntry> {
        if groups.len() <= 1 {
            return groups;
        }

        let mut ordered = Vec::with_capacity(groups.len());
        ordered.push(groups.remove(0));

        while !groups.is_empty() {
            let last = ordered[ordered.len() - 1].aisle_id;
            let remaining: Vec<u32> = groups.iter().map(|g| g.aisle_id).collect();

            // remaining is never empty here
            let next = nearest_aisle(last, &remaining, &self.layout).unwrap_or(0);
            ordered.push(groups.remove(next));
        }

        ordered
    }

    /// Order bare aisle ids the same way [`Router::order_entries`] does
    pub fn order_aisles(&self, aisles: &[u32]) -> Vec<u32> {
        let groups = aisles
            .iter()
            .map(|&aisle_id| RouteEntry {
                aisle_id,
                items: Vec::new(),
            })
            .collect();

        self.order_entries(groups)
            .into_iter()
            .map(|g| g.aisle_id)
            .collect()
    }
}

/// Build a route with the default matcher and the default store layout
pub fn build_route<S: AsRef<str>>(items: &[S], catalog: &[CatalogEntry]) -> Route {
    Router::default().build_route(items, catalog)
}
