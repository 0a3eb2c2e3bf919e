//! Icon resolution
//!
//! Turns candidate names into `Resolution`s: one search per name, then the
//! exact-match / substring-match policy over the returned icons.

use futures::stream::{self, StreamExt};

use crate::backends::iconify::IconSearch;
use crate::core::model::{Collection, Resolution};
use crate::core::progress::Progress;

pub const DEFAULT_CONCURRENCY: usize = 16;

/// Pick the icon matching `name` from bare icon names in service order.
///
/// An exact match always wins. Otherwise the first icon that contains `name`,
/// or is contained in it, is returned.
pub fn match_icon<'a>(name: &str, icons: &[&'a str]) -> Option<&'a str> {
    if let Some(exact) = icons.iter().find(|icon| **icon == name) {
        return Some(*exact);
    }

    icons
        .iter()
        .find(|icon| icon.contains(name) || name.contains(**icon))
        .copied()
}

/// Resolves names against an `IconSearch` backend
pub struct Resolver<S> {
    search: S,
    collection: Collection,
    report_failures: bool,
}

impl<S: IconSearch> Resolver<S> {
    pub fn new(search: S, collection: Collection) -> Self {
        Self {
            search,
            collection,
            report_failures: false,
        }
    }

    /// Surface lookup failures as `CheckFailed` instead of `NotFound`
    pub fn report_failures(mut self, enabled: bool) -> Self {
        self.report_failures = enabled;
        self
    }

    /// Resolve a single name. Lookup failures never escape.
    pub async fn resolve(&self, name: &str) -> Resolution {
        let icons = match self.search.search(name).await {
            Ok(icons) => icons,
            Err(err) => {
                tracing::debug!(app = name, error = %err, "icon lookup failed");
                return if self.report_failures {
                    Resolution::check_failed(name, err.to_string())
                } else {
                    Resolution::not_found(name)
                };
            }
        };

        let bare: Vec<&str> = icons
            .iter()
            .map(|icon| self.collection.strip(icon))
            .filter(|icon| !icon.is_empty())
            .collect();

        match match_icon(name, &bare) {
            Some(icon) => {
                tracing::debug!(app = name, icon, "icon matched");
                Resolution::found(name, icon)
            }
            None => Resolution::not_found(name),
        }
    }

    /// Resolve all names with at most `concurrency` lookups in flight.
    ///
    /// Output order follows `names`, not completion order.
    pub async fn resolve_all(
        &self,
        names: &[String],
        concurrency: usize,
        progress: &Progress,
    ) -> Vec<Resolution> {
        stream::iter(names)
            .map(|name| async move {
                let resolution = self.resolve(name).await;
                progress.advance();
                resolution
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
