//! Notification read-state tracking.
//!
//! Acknowledgment is a single-id write followed by a full resync; the
//! console never patches one notification locally. The unread count is
//! recomputed from the snapshot on every ask so it can never drift.

use log::{error, info};

use crate::backend::BackendClient;
use crate::sync::aggregator::SyncHandle;
use crate::sync::snapshot::DashboardSnapshot;

/// Unread notifications in a snapshot. Counted, never cached.
pub fn unread_count(snapshot: &DashboardSnapshot) -> usize {
    snapshot
        .notifications
        .iter()
        .filter(|notification| !notification.is_read)
        .count()
}

#[derive(Clone)]
pub struct NotificationTracker {
    backend: BackendClient,
    sync: SyncHandle,
}

impl NotificationTracker {
    pub fn new(backend: BackendClient, sync: SyncHandle) -> Self {
        Self { backend, sync }
    }

    /// Acknowledge one notification, then resync everything. Failures
    /// (including acknowledging an id the backend considers already read)
    /// are contained and log-only: repeat acknowledgments are harmless
    /// from the operator's point of view.
    pub async fn mark_read(&self, notification_id: &str) {
        match self.backend.mark_notification_read(notification_id).await {
            Ok(()) => {
                info!("notification {notification_id} acknowledged");
                self.sync.spawn_cycle();
            }
            Err(err) => {
                error!("failed to acknowledge notification {notification_id}: {err:#}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::models::{Notification, NotificationKind};
    use crate::sync::snapshot::SnapshotStore;
    use mockito::{Mock, Server, ServerGuard};
    use tokio::time::Duration;

    fn notification_fixture(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.into(),
            message: "Valuable item detected".into(),
            kind: NotificationKind::Valuable,
            timestamp: chrono::Utc::now(),
            item_id: None,
            is_read,
        }
    }

    fn tracker_for(url: &str) -> (NotificationTracker, SnapshotStore) {
        let backend = BackendClient::new(&ConsoleConfig::new(url));
        let store = SnapshotStore::new();
        let sync = SyncHandle::new(backend.clone(), store.clone());
        (NotificationTracker::new(backend, sync), store)
    }

    /// Mounts the six reads with `notifications_body` as the notifications
    /// payload and empty/minimal everything else. The notifications mock
    /// comes back named so the test can swap it after the ack.
    async fn mount_reads(server: &mut ServerGuard, notifications_body: &str) -> (Mock, Vec<Mock>) {
        let notifications = server
            .mock("GET", "/api/notifications")
            .with_status(200)
            .with_body(notifications_body)
            .create_async()
            .await;
        let mut others = Vec::new();
        for (path, body) in [
            (
                "/api/vacuum/status",
                r#"{"id":"v-1","isActive":false,"battery":90,"location":"Dock",
                    "mode":"charging","valuablesBinCount":0,"dustBinLevel":5,
                    "lastCleaned":"2024-05-01T10:00:00Z","totalAreaCleaned":0.0}"#,
            ),
            ("/api/items/detected?limit=20", "[]"),
            ("/api/items/valuables", "[]"),
            (
                "/api/stats",
                r#"{"totalItemsDetected":0,"valuablesSaved":0,"totalSessions":0,
                    "accuracyRate":95.0,"avgConfidence":0.85,"topCategories":[]}"#,
            ),
            ("/api/sessions?limit=5", "[]"),
        ] {
            others.push(
                server
                    .mock("GET", path)
                    .with_status(200)
                    .with_body(body)
                    .create_async()
                    .await,
            );
        }
        (notifications, others)
    }

    #[test]
    fn unread_count_is_recomputed_from_the_snapshot() {
        let mut snapshot = DashboardSnapshot {
            notifications: vec![
                notification_fixture("n-1", false),
                notification_fixture("n-2", false),
                notification_fixture("n-3", true),
            ],
            ..DashboardSnapshot::default()
        };
        assert_eq!(unread_count(&snapshot), 2);

        snapshot.notifications[0].is_read = true;
        assert_eq!(unread_count(&snapshot), 1);

        assert_eq!(unread_count(&DashboardSnapshot::default()), 0);
    }

    #[tokio::test]
    async fn successful_ack_resyncs_and_drops_the_count_by_one() {
        let mut server = Server::new_async().await;
        let ack = server
            .mock("POST", "/api/notifications/mark-read?notification_id=n-1")
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;
        let (unread_mock, _others) = mount_reads(
            &mut server,
            r#"[{"id":"n-1","message":"Valuable item detected","type":"valuable",
                 "timestamp":"2024-05-01T09:50:00Z","isRead":false},
                {"id":"n-2","message":"Dust bin almost full","type":"warning",
                 "timestamp":"2024-05-01T08:00:00Z","isRead":false}]"#,
        )
        .await;

        let backend = BackendClient::new(&ConsoleConfig::new(server.url()));
        let store = SnapshotStore::new();
        let sync = SyncHandle::new(backend.clone(), store.clone());
        let tracker = NotificationTracker::new(backend, sync.clone());

        sync.run_cycle().await;
        assert_eq!(unread_count(&store.current()), 2);

        // After the ack, the backend reports n-1 as read.
        unread_mock.remove_async().await;
        let _read_mock = server
            .mock("GET", "/api/notifications")
            .with_status(200)
            .with_body(
                r#"[{"id":"n-1","message":"Valuable item detected","type":"valuable",
                     "timestamp":"2024-05-01T09:50:00Z","isRead":true},
                    {"id":"n-2","message":"Dust bin almost full","type":"warning",
                     "timestamp":"2024-05-01T08:00:00Z","isRead":false}]"#,
            )
            .create_async()
            .await;

        let mut rx = store.subscribe();
        tracker.mark_read("n-1").await;

        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("resync should commit a snapshot")
            .unwrap();

        ack.assert_async().await;
        let snapshot = store.current();
        assert!(snapshot
            .notifications
            .iter()
            .find(|n| n.id == "n-1")
            .unwrap()
            .is_read);
        assert_eq!(unread_count(&snapshot), 1);
    }

    #[tokio::test]
    async fn failed_ack_is_contained_and_skips_the_resync() {
        let mut server = Server::new_async().await;
        let _ack = server
            .mock("POST", "/api/notifications/mark-read?notification_id=n-9")
            .with_status(404)
            .create_async()
            .await;

        let (tracker, store) = tracker_for(&server.url());
        tracker.mark_read("n-9").await;

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(store.is_loading());
    }
}
