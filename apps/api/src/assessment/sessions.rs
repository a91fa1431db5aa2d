//! In-memory assessment sessions.
//!
//! Each session owns one `Collector`. The map is the only shared mutable state in the
//! service; collector operations run to completion under the write guard and the scorer
//! only ever sees a cloned `ResponseSet`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::assessment::catalog::{Catalog, Question};
use crate::assessment::collector::Collector;
use crate::assessment::error::{CollectorError, SessionError};
use crate::assessment::responses::ResponseSet;

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub collector: Collector,
}

/// Client-facing snapshot of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub position: usize,
    pub total: usize,
    pub progress: f64,
    pub current_question: Question,
    pub answers: ResponseSet,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&AssessmentSession> for SessionView {
    fn from(session: &AssessmentSession) -> Self {
        let c = &session.collector;
        Self {
            session_id: session.id,
            position: c.position(),
            total: c.total(),
            progress: c.progress(),
            current_question: c.current_question().clone(),
            answers: c.responses().clone(),
            is_complete: c.is_complete(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    catalog: Arc<Catalog>,
    sessions: Arc<RwLock<HashMap<Uuid, AssessmentSession>>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(catalog: Arc<Catalog>, max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            catalog,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            idle_ttl,
        }
    }

    #[cfg(test)]
    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Idle past the TTL. Such sessions are reported as `NotFound` even before pruning.
    fn is_expired(&self, session: &AssessmentSession, now: DateTime<Utc>) -> bool {
        now - session.updated_at >= self.idle_ttl
    }

    /// Opens a fresh session at the first question. Idle sessions are pruned first.
    pub async fn create(&self) -> Result<SessionView, SessionError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let pruned = prune_idle(&mut sessions, now, self.idle_ttl);
        if pruned > 0 {
            debug!("Pruned {pruned} idle assessment sessions");
        }
        if sessions.len() >= self.max_sessions {
            return Err(SessionError::CapacityExceeded(self.max_sessions));
        }

        let session = AssessmentSession {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            collector: Collector::new(Arc::clone(&self.catalog)),
        };
        let view = SessionView::from(&session);
        info!("Assessment session {} started", session.id);
        sessions.insert(session.id, session);
        Ok(view)
    }

    pub async fn view(&self, id: Uuid) -> Result<SessionView, SessionError> {
        let now = Utc::now();
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .filter(|s| !self.is_expired(s, now))
            .map(SessionView::from)
            .ok_or(SessionError::NotFound(id))
    }

    /// Runs `op` against the session's collector. `updated_at` moves only on success.
    pub async fn update<F>(&self, id: Uuid, op: F) -> Result<SessionView, SessionError>
    where
        F: FnOnce(&mut Collector) -> Result<(), CollectorError>,
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let expired = match sessions.get(&id) {
            Some(session) => self.is_expired(session, now),
            None => return Err(SessionError::NotFound(id)),
        };
        if expired {
            sessions.remove(&id);
            debug!("Assessment session {id} expired");
            return Err(SessionError::NotFound(id));
        }

        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        op(&mut session.collector)?;
        session.updated_at = Utc::now();
        Ok(SessionView::from(&*session))
    }

    /// Completed response set, cloned out for scoring.
    pub async fn finished_responses(&self, id: Uuid) -> Result<ResponseSet, SessionError> {
        let now = Utc::now();
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&id)
            .filter(|s| !self.is_expired(s, now))
            .ok_or(SessionError::NotFound(id))?;
        Ok(session.collector.finish()?)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.remove(&id) {
            Some(session) if !self.is_expired(&session, now) => {
                info!("Assessment session {id} closed");
                Ok(())
            }
            _ => Err(SessionError::NotFound(id)),
        }
    }
}

fn prune_idle(
    sessions: &mut HashMap<Uuid, AssessmentSession>,
    now: DateTime<Utc>,
    idle_ttl: Duration,
) -> usize {
    let before = sessions.len();
    sessions.retain(|_, s| now - s.updated_at < idle_ttl);
    before - sessions.len()
}
