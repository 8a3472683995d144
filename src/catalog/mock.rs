//! Scripted catalog for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::{ErrorKind, LibrisError, Result};
use crate::catalog::Catalog;
use crate::domain::RawRecord;

type Scripted<T> = std::result::Result<T, ErrorKind>;

#[derive(Default)]
pub(crate) struct MockCatalog {
    trending: Mutex<VecDeque<Scripted<Vec<RawRecord>>>>,
    search: Mutex<VecDeque<Scripted<Vec<RawRecord>>>>,
    subjects: Mutex<HashMap<String, VecDeque<Scripted<Vec<RawRecord>>>>>,
    details: Mutex<HashMap<String, Scripted<RawRecord>>>,
    calls: AtomicUsize,
    pub(crate) subject_requests: Mutex<Vec<(String, usize)>>,
    pub(crate) search_requests: Mutex<Vec<(String, usize)>>,
}

pub(crate) fn titled(key: &str, title: &str) -> RawRecord {
    RawRecord {
        key: Some(key.to_string()),
        title: Some(title.to_string()),
        ..RawRecord::default()
    }
}

fn to_error(kind: ErrorKind, what: &str) -> LibrisError {
    match kind {
        ErrorKind::NotFound => LibrisError::NotFound(what.to_string()),
        ErrorKind::Validation => LibrisError::Validation(what.to_string()),
        ErrorKind::Transport => LibrisError::Status {
            status: 503,
            url: what.to_string(),
        },
    }
}

impl MockCatalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_trending(&self, result: Scripted<Vec<RawRecord>>) {
        self.trending.lock().unwrap().push_back(result);
    }

    pub(crate) fn push_search(&self, result: Scripted<Vec<RawRecord>>) {
        self.search.lock().unwrap().push_back(result);
    }

    pub(crate) fn push_subject(&self, subject: &str, result: Scripted<Vec<RawRecord>>) {
        self.subjects
            .lock()
            .unwrap()
            .entry(subject.to_string())
            .or_default()
            .push_back(result);
    }

    pub(crate) fn set_detail(&self, key: &str, result: Scripted<RawRecord>) {
        self.details.lock().unwrap().insert(key.to_string(), result);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(queue: &Mutex<VecDeque<Scripted<Vec<RawRecord>>>>, what: &str) -> Result<Vec<RawRecord>> {
        match queue.lock().unwrap().pop_front() {
            Some(Ok(records)) => Ok(records),
            Some(Err(kind)) => Err(to_error(kind, what)),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn fetch_trending(&self) -> Result<Vec<RawRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.trending, "trending")
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.search_requests.lock().unwrap().push((query.to_string(), limit));
        Self::next(&self.search, query)
    }

    async fn search_by_subject(&self, subject: &str, limit: usize) -> Result<Vec<RawRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.subject_requests.lock().unwrap().push((subject.to_string(), limit));
        let scripted = self
            .subjects
            .lock()
            .unwrap()
            .get_mut(subject)
            .and_then(VecDeque::pop_front);
        match scripted {
            Some(Ok(records)) => Ok(records),
            Some(Err(kind)) => Err(to_error(kind, subject)),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_detail(&self, key: &str) -> Result<RawRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.details.lock().unwrap().get(key) {
            Some(Ok(record)) => Ok(record.clone()),
            Some(Err(kind)) => Err(to_error(*kind, key)),
            None => Err(LibrisError::NotFound(key.to_string())),
        }
    }
}
