use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    title: String,
    points: u32,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
    points: u32,
}

#[derive(Debug, Default)]
struct TicketUpdate {
    title: Option<String>,
    points: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("points must be positive")]
    NoPoints,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Context = ();
    type Error = TicketError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.title.is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: params.title,
            points: params.points,
        })
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(points) = update.points {
            if points == 0 {
                return Err(TicketError::NoPoints);
            }
            self.points = points;
        }
        Ok(())
    }
}

fn counter() -> impl Fn() -> u32 + Send + Sync + 'static {
    let next = AtomicU32::new(1);
    move || next.fetch_add(1, Ordering::SeqCst)
}

fn create(title: &str, points: u32) -> TicketCreate {
    TicketCreate {
        title: title.to_string(),
        points,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, counter());
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let ticket = client.create(create("Login page", 3)).await.unwrap();
    assert_eq!(ticket.id, 1);

    // 2. Get
    let fetched = client.get(ticket.id).await.unwrap().unwrap();
    assert_eq!(fetched, ticket);

    // 3. Update
    let update = TicketUpdate {
        points: Some(5),
        ..Default::default()
    };
    let updated = client.update(ticket.id, update).await.unwrap();
    assert_eq!(updated.points, 5);
    assert_eq!(updated.title, "Login page");

    // 4. Delete
    let removed = client.delete(ticket.id).await.unwrap();
    assert_eq!(removed, updated);
    assert!(client.get(ticket.id).await.unwrap().is_none());

    drop(client);
    assert!(handle.await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, counter());
    tokio::spawn(actor.run(()));

    let update = client.update(42, TicketUpdate::default()).await;
    assert!(matches!(update, Err(FrameworkError::NotFound(id)) if id == "42"));

    let delete = client.delete(42).await;
    assert!(matches!(delete, Err(FrameworkError::NotFound(_))));

    assert!(client.get(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_hooks_leave_store_untouched() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, counter());
    tokio::spawn(actor.run(()));

    let rejected = client.create(create("", 1)).await;
    assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));
    assert!(client.list().await.unwrap().is_empty());

    let ticket = client.create(create("Search", 2)).await.unwrap();
    let update = TicketUpdate {
        title: Some("Renamed".to_string()),
        points: Some(0),
    };
    let failed = client.update(ticket.id, update).await;
    assert!(matches!(failed, Err(FrameworkError::EntityError(_))));

    // The title change in the same update must not have been stored.
    let stored = client.get(ticket.id).await.unwrap().unwrap();
    assert_eq!(stored, ticket);
}

#[tokio::test]
async fn test_load_list_and_final_dump() {
    let (mut actor, client) = ResourceActor::<Ticket>::new(10, || 100);
    let loaded = actor.load(vec![
        Ticket {
            id: 7,
            title: "Persisted A".to_string(),
            points: 1,
        },
        Ticket {
            id: 3,
            title: "Persisted B".to_string(),
            points: 2,
        },
    ]);
    assert_eq!(loaded, 2);
    let handle = tokio::spawn(actor.run(()));

    client.create(create("Fresh", 8)).await.unwrap();
    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![7, 3, 100]);

    client.delete(7).await.unwrap();

    drop(client);
    let remaining: Vec<u32> = handle.await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![3, 100]);
}

#[tokio::test]
async fn test_concurrent_creates_are_serialized() {
    let (actor, client) = ResourceActor::<Ticket>::new(4, counter());
    let handle = tokio::spawn(actor.run(()));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.create(create(&format!("ticket {i}"), 1)).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let mut ids: Vec<u32> = client.list().await.unwrap().iter().map(|t| t.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u32>>());

    drop(client);
    assert_eq!(handle.await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_client_after_shutdown_reports_closed() {
    let (actor, client) = ResourceActor::<Ticket>::new(10, counter());
    let observer = client.clone();
    let handle = tokio::spawn(actor.run(()));

    // Abort the actor task so its receiver is dropped.
    handle.abort();
    let _ = handle.await;
    drop(client);

    let result = observer.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
