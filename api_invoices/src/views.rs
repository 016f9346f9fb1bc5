//! Cache invalidation and redirects for dashboard views.

use actix_web::{HttpResponse, http::header::LOCATION};
use dashmap::DashMap;

pub const VIEW_REVISION_HEADER: &str = "X-View-Revision";

/// Side effects an action requests from the hosting web layer once it has
/// written to the store.
pub trait ViewInvalidator: Send + Sync {
    /// Marks the cached view at `path` as stale.
    fn invalidate(&self, path: &str);

    /// Builds the redirect that ends the action.
    fn redirect(&self, path: &str) -> Redirect;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    /// Revision of the target view at the time of the redirect.
    pub revision: u64,
}

impl Redirect {
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::SeeOther()
            .append_header((LOCATION, self.location))
            .append_header((VIEW_REVISION_HEADER, self.revision.to_string()))
            .finish()
    }
}

/// Per-path revision counters.
///
/// A path starts at revision 0 and is bumped on every invalidation. Clients
/// holding a rendered copy compare revisions to decide whether to refetch.
#[derive(Debug, Default)]
pub struct ViewRevisions {
    revisions: DashMap<String, u64>,
}

impl ViewRevisions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revision(&self, path: &str) -> u64 {
        self.revisions.get(path).map(|r| *r).unwrap_or(0)
    }
}

impl ViewInvalidator for ViewRevisions {
    fn invalidate(&self, path: &str) {
        let mut revision = self.revisions.entry(path.to_string()).or_insert(0);
        *revision += 1;
        log::debug!("Invalidated view {} (revision {})", path, *revision);
    }

    fn redirect(&self, path: &str) -> Redirect {
        Redirect {
            location: path.to_string(),
            revision: self.revision(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn invalidation_bumps_only_the_given_path() {
        let views = ViewRevisions::new();
        views.invalidate("/dashboard/invoices");
        views.invalidate("/dashboard/invoices");

        assert_eq!(views.revision("/dashboard/invoices"), 2);
        assert_eq!(views.revision("/dashboard"), 0);
    }

    #[test]
    fn redirect_carries_current_revision() {
        let views = ViewRevisions::new();
        views.invalidate("/dashboard/invoices");

        let res = views.redirect("/dashboard/invoices").into_response();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(LOCATION).unwrap().to_str().unwrap(),
            "/dashboard/invoices"
        );
        assert_eq!(
            res.headers()
                .get(VIEW_REVISION_HEADER)
                .unwrap()
                .to_str()
                .unwrap(),
            "1"
        );
    }
}
