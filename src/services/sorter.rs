//! Category-aware ordering of parsed services
//!
//! Every comparator ends in the same tie-break chain (display name, original
//! name, record id), so the result never depends on input order.

use std::cmp::Ordering;

use crate::types::{CatalogService, CategoryKey, ParsedService};

/// Rank for attributes that are absent
const MISSING_RANK: u32 = 99;

/// Sorter for catalog services
pub struct Sorter;

impl Sorter {
    /// Sorted copy of one category's members
    pub fn sort_category(services: &[CatalogService], key: CategoryKey) -> Vec<CatalogService> {
        let mut sorted = services.to_vec();
        sorted.sort_by(|a, b| Self::compare(key, a, b));
        sorted
    }

    /// Sorted copy ordered by service name (search results)
    pub fn sort_by_name(services: &[CatalogService]) -> Vec<CatalogService> {
        let mut sorted = services.to_vec();
        sorted.sort_by(|a, b| {
            a.record
                .name
                .cmp(&b.record.name)
                .then_with(|| a.record.id.cmp(&b.record.id))
        });
        sorted
    }

    /// Total order used for members of `key`
    pub fn compare(key: CategoryKey, a: &CatalogService, b: &CatalogService) -> Ordering {
        let primary = match key {
            CategoryKey::WindowTint => Self::compare_tint(a, b),
            CategoryKey::Detail => Self::compare_detail(a, b),
            _ => Ordering::Equal,
        };
        primary.then_with(|| Self::tie_break(a, b))
    }

    fn compare_tint(a: &CatalogService, b: &CatalogService) -> Ordering {
        let (a, b) = (&a.parsed, &b.parsed);
        let area = |p: &ParsedService| p.tint_area.as_deref().unwrap_or("").to_owned();
        let tint_rank = |p: &ParsedService| p.tint_type.map_or(MISSING_RANK, |t| t.rank());

        area(a)
            .cmp(&area(b))
            .then_with(|| tint_rank(a).cmp(&tint_rank(b)))
    }

    fn compare_detail(a: &CatalogService, b: &CatalogService) -> Ordering {
        let (a, b) = (&a.parsed, &b.parsed);
        let size_rank = |p: &ParsedService| p.vehicle_size.map_or(MISSING_RANK, |s| s.rank());
        let type_rank = |p: &ParsedService| p.service_type.map_or(MISSING_RANK, |t| t.rank());
        let level = |p: &ParsedService| p.level.unwrap_or(MISSING_RANK);

        size_rank(a)
            .cmp(&size_rank(b))
            .then_with(|| type_rank(a).cmp(&type_rank(b)))
            .then_with(|| level(a).cmp(&level(b)))
    }

    fn tie_break(a: &CatalogService, b: &CatalogService) -> Ordering {
        a.parsed
            .display_name
            .cmp(&b.parsed.display_name)
            .then_with(|| a.parsed.original_name.cmp(&b.parsed.original_name))
            .then_with(|| a.record.id.cmp(&b.record.id))
    }
}
