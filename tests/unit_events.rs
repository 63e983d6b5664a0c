use chrono::Utc;
use inkpress::modules::posts::events::PostEvents;
use inkpress::modules::posts::model::Post;
use tokio::sync::broadcast::error::TryRecvError;
use uuid::Uuid;

fn make_post(title: &str) -> Post {
    Post {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: None,
        published: true,
        author_id: Uuid::new_v4(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_publish_reaches_every_subscriber() {
    let events = PostEvents::new();
    let mut rx1 = events.subscribe();
    let mut rx2 = events.subscribe();

    let post = make_post("broadcast");
    events.publish(post.clone());

    assert_eq!(rx1.recv().await.unwrap(), post);
    assert_eq!(rx2.recv().await.unwrap(), post);
}

#[tokio::test]
async fn test_late_subscriber_misses_prior_events() {
    let events = PostEvents::new();
    let mut early = events.subscribe();

    events.publish(make_post("before"));

    let mut late = events.subscribe();
    events.publish(make_post("after"));

    assert_eq!(early.recv().await.unwrap().title, "before");
    assert_eq!(early.recv().await.unwrap().title, "after");

    // the late subscriber only sees what was published after it joined
    assert_eq!(late.recv().await.unwrap().title, "after");
    assert!(matches!(late.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_publish_without_subscribers_is_a_noop() {
    let events = PostEvents::new();
    events.publish(make_post("nobody listening"));
}

#[tokio::test]
async fn test_subscribers_hold_independent_cursors() {
    let events = PostEvents::new();
    let mut rx1 = events.subscribe();
    let mut rx2 = events.subscribe();

    events.publish(make_post("one"));
    events.publish(make_post("two"));

    // draining one receiver does not advance the other
    assert_eq!(rx1.recv().await.unwrap().title, "one");
    assert_eq!(rx1.recv().await.unwrap().title, "two");
    assert_eq!(rx2.recv().await.unwrap().title, "one");
    assert_eq!(rx2.recv().await.unwrap().title, "two");
}
