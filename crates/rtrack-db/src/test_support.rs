//! Shared fixtures for rtrack-db unit tests.

pub(crate) mod helpers {
    use rtrack_core::drafts::{NewComponent, NewModule, NewRelease, NewTicket};
    use rtrack_core::entities::{Component, Module, Release, Ticket};

    use crate::service::TrackerService;

    /// In-memory service with migrations applied.
    pub async fn test_service() -> TrackerService {
        TrackerService::new_local(":memory:").await.unwrap()
    }

    pub async fn seed_module(svc: &TrackerService, name: &str) -> Module {
        svc.create_catalog_item::<Module>(&NewModule {
            name: name.to_string(),
            description: None,
        })
        .await
        .unwrap()
    }

    /// Components appended in the given order (`sort_order` 1..N).
    pub async fn seed_components(
        svc: &TrackerService,
        module_id: &str,
        names: &[&str],
    ) -> Vec<Component> {
        let mut components = Vec::new();
        for name in names {
            let component = svc
                .create_component(&NewComponent {
                    name: (*name).to_string(),
                    module_id: module_id.to_string(),
                    sort_order: None,
                })
                .await
                .unwrap();
            components.push(component);
        }
        components
    }

    pub async fn seed_release(
        svc: &TrackerService,
        module_id: &str,
        name: &str,
        active: bool,
    ) -> Release {
        svc.create_release(&NewRelease {
            name: name.to_string(),
            module_id: module_id.to_string(),
            active,
            ..Default::default()
        })
        .await
        .unwrap()
    }

    pub async fn seed_ticket(svc: &TrackerService, release_id: &str, title: &str) -> Ticket {
        svc.create_ticket(&NewTicket {
            title: title.to_string(),
            release_id: Some(release_id.to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
    }
}
