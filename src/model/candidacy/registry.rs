use chrono::Utc;
use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result, ValidationErrors};
use crate::model::counter::Counter;

use super::{CandidacyRequest, CandidacySpec, RequestId, RequestStatus};

/// In-memory store of candidacy requests, in submission order.
///
/// Lives for the duration of the process; nothing is persisted.
#[derive(Debug)]
pub struct CandidacyRegistry {
    requests: Vec<CandidacyRequest>,
    ids: Counter,
    allow_reprocessing: bool,
}

impl CandidacyRegistry {
    /// An empty registry. Ids start at 1.
    pub fn new(config: &Config) -> Self {
        Self {
            requests: Vec::new(),
            ids: Counter::default(),
            allow_reprocessing: config.allow_reprocessing(),
        }
    }

    /// Rebuild a registry from existing requests (e.g. the demo seed
    /// dataset). The id counter resumes after the highest existing id.
    pub fn from_requests(requests: Vec<CandidacyRequest>, config: &Config) -> Self {
        let next = requests
            .iter()
            .map(|request| request.id)
            .max()
            .map_or(1, |id| id + 1);
        Self {
            requests,
            ids: Counter::new(next),
            allow_reprocessing: config.allow_reprocessing(),
        }
    }

    /// Validate and file a new application. On success the request gets the
    /// next id, status [`RequestStatus::Pending`], and the current time as
    /// its submission timestamp.
    pub fn submit(&mut self, spec: CandidacySpec) -> Result<CandidacyRequest> {
        ValidationErrors::into_result(spec.validate())?;

        let id = self.ids.next();
        let request = spec.into_request(id, Utc::now());
        info!("Candidacy request {id} submitted by {}", request.full_name);
        self.requests.push(request.clone());
        Ok(request)
    }

    /// Accept the request with the given id.
    pub fn approve(&mut self, id: RequestId) -> Result<CandidacyRequest> {
        self.decide(id, RequestStatus::Approved)
    }

    /// Decline the request with the given id.
    pub fn reject(&mut self, id: RequestId) -> Result<CandidacyRequest> {
        self.decide(id, RequestStatus::Rejected)
    }

    /// Record a decision. The status is overwritten even if a decision was
    /// already made (last write wins), unless reprocessing is disabled.
    fn decide(&mut self, id: RequestId, status: RequestStatus) -> Result<CandidacyRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| Error::not_found(format!("Candidacy request with id '{id}'")))?;

        if !self.allow_reprocessing && request.status != RequestStatus::Pending {
            return Err(Error::AlreadyProcessed(id));
        }

        request.status = status;
        info!("Candidacy request {id} marked {status}");
        Ok(request.clone())
    }

    /// Look up a request by id.
    pub fn get(&self, id: RequestId) -> Option<&CandidacyRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    /// Requests still awaiting a decision, in submission order.
    pub fn pending(&self) -> impl Iterator<Item = &CandidacyRequest> {
        self.requests
            .iter()
            .filter(|request| request.status == RequestStatus::Pending)
    }

    /// Requests that have been decided either way, in submission order.
    pub fn processed(&self) -> impl Iterator<Item = &CandidacyRequest> {
        self.requests
            .iter()
            .filter(|request| request.status != RequestStatus::Pending)
    }

    /// Every request ever filed, in submission order.
    pub fn all(&self) -> &[CandidacyRequest] {
        &self.requests
    }

    /// Per-status totals for the review screen's stat cards.
    pub fn counts(&self) -> RequestCounts {
        let mut counts = RequestCounts::default();
        for request in &self.requests {
            match request.status {
                RequestStatus::Pending => counts.pending += 1,
                RequestStatus::Approved => counts.approved += 1,
                RequestStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }
}

/// How many requests sit in each status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CandidacyRegistry {
        CandidacyRegistry::new(&Config::default())
    }

    #[test]
    fn submit_assigns_increasing_ids() {
        let mut registry = registry();
        let first = registry.submit(CandidacySpec::example()).unwrap();
        let second = registry.submit(CandidacySpec::example2()).unwrap();

        assert_eq!(first.status, RequestStatus::Pending);
        assert_eq!(second.status, RequestStatus::Pending);
        assert!(second.id > first.id);
    }

    #[test]
    fn invalid_submission_is_not_filed() {
        let mut registry = registry();
        let spec = CandidacySpec {
            email: String::new(),
            ..CandidacySpec::example()
        };

        let error = registry.submit(spec).unwrap_err();
        assert!(matches!(error, Error::Validation(ref errors) if errors.contains("email")));
        assert!(registry.all().is_empty());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut registry = registry();
        assert!(matches!(registry.approve(99), Err(Error::NotFound(_))));
        assert!(matches!(registry.reject(99), Err(Error::NotFound(_))));
    }

    #[test]
    fn last_decision_wins() {
        let mut registry = registry();
        let id = registry.submit(CandidacySpec::example()).unwrap().id;

        registry.approve(id).unwrap();
        let request = registry.reject(id).unwrap();

        assert_eq!(request.status, RequestStatus::Rejected);
        assert_eq!(registry.get(id).unwrap().status, RequestStatus::Rejected);
    }

    #[test]
    fn reprocessing_can_be_disabled() {
        let mut registry = CandidacyRegistry::new(&Config::example_strict());
        let id = registry.submit(CandidacySpec::example()).unwrap().id;

        registry.approve(id).unwrap();
        let error = registry.reject(id).unwrap_err();

        assert!(matches!(error, Error::AlreadyProcessed(bad) if bad == id));
        assert_eq!(registry.get(id).unwrap().status, RequestStatus::Approved);
    }

    #[test]
    fn pending_and_processed_partition_the_registry() {
        let mut registry = registry();
        let first = registry.submit(CandidacySpec::example()).unwrap().id;
        let second = registry.submit(CandidacySpec::example2()).unwrap().id;
        let third = registry.submit(CandidacySpec::example3()).unwrap().id;

        registry.approve(second).unwrap();

        let pending: Vec<_> = registry.pending().map(|request| request.id).collect();
        let processed: Vec<_> = registry.processed().map(|request| request.id).collect();
        assert_eq!(pending, [first, third]);
        assert_eq!(processed, [second]);
        assert_eq!(
            registry.processed().next().unwrap().status,
            RequestStatus::Approved
        );

        // Together the two lists cover the whole registry, in order.
        let all: Vec<_> = registry.all().iter().map(|request| request.id).collect();
        assert_eq!(all, [first, second, third]);
        assert_eq!(pending.len() + processed.len(), all.len());
    }

    #[test]
    fn counts_track_decisions() {
        let mut registry = registry();
        let first = registry.submit(CandidacySpec::example()).unwrap().id;
        let second = registry.submit(CandidacySpec::example2()).unwrap().id;
        registry.submit(CandidacySpec::example3()).unwrap();

        registry.approve(first).unwrap();
        registry.reject(second).unwrap();

        assert_eq!(
            registry.counts(),
            RequestCounts {
                pending: 1,
                approved: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn seeded_ids_resume_after_the_highest() {
        let config = Config::default();
        let mut registry =
            CandidacyRegistry::from_requests(crate::seed::candidacy_requests(), &config);

        let next = registry.submit(CandidacySpec::example()).unwrap();
        assert_eq!(next.id, 4);
    }
}
