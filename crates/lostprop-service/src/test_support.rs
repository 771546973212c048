//! Shared fixtures for service unit tests.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use lostprop_core::traits::ChangeNotifier;
use lostprop_core::types::Topic;
use lostprop_database::Stores;
use lostprop_entity::report::{NewReport, Report};
use lostprop_entity::user::{NewUser, User, UserRole};

use crate::context::SessionContext;

/// Notifier that remembers every topic it was given.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    topics: Mutex<Vec<Topic>>,
}

impl RecordingNotifier {
    pub fn topics(&self) -> Vec<Topic> {
        self.topics.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn notify(&self, topic: Topic) {
        if let Ok(mut topics) = self.topics.lock() {
            topics.push(topic);
        }
    }
}

pub fn notifier() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::default())
}

pub async fn seed_user(stores: &Stores, email: &str, role: UserRole) -> User {
    let user = NewUser {
        email: email.to_string(),
        full_name: email.split('@').next().unwrap_or(email).to_string(),
        password_hash: String::new(),
        role,
    }
    .into_user(Utc::now());
    stores.users.create(&user).await.unwrap()
}

pub fn ctx(user: &User) -> SessionContext {
    SessionContext::new(user.id, user.email.clone(), user.role)
}

pub fn submission(name: &str, nik: &str) -> NewReport {
    NewReport {
        name: name.to_string(),
        national_id: nik.to_string(),
        ..Default::default()
    }
}

pub async fn seed_report(stores: &Stores, owner: Uuid, name: &str) -> Report {
    let report = Report::from_submission(submission(name, "1376000000000001"), owner, Utc::now());
    stores.reports.insert(&report).await.unwrap()
}
