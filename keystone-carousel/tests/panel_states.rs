use std::sync::Arc;

use async_trait::async_trait;
use keystone_carousel::prelude::*;
use keystone_carousel::constants::notices;
use keystone_carousel::sources::{JsonFileSource, StaticItemSource};
use keystone_carousel::{CarouselError, IgnoreReason, MessageOutcome};
use keystone_config::ConfigGuardRailError;
use mockall::{mock, predicate::eq};

mock! {
    pub Navigator {}
    impl DetailNavigator for Navigator {
        fn navigate_to_detail(&self, id: &ItemId);
    }
}

mock! {
    pub Source {}
    #[async_trait]
    impl ItemSource for Source {
        async fn fetch_items(&self) -> Result<Vec<CarouselItem>, SourceError>;
    }
}

fn project(id: &str, date: &str, status: &str) -> CarouselItem {
    CarouselItem::new(ItemId::new(id).unwrap(), format!("Project {id}"))
        .with_status(status)
        .with_date_str(date)
        .unwrap()
}

fn quiet_settings() -> CarouselSettings {
    CarouselSettings {
        autoplay_on_start: false,
        ..CarouselSettings::default()
    }
}

fn idle_navigator() -> Arc<dyn DetailNavigator> {
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate_to_detail().never();
    Arc::new(navigator)
}

#[test]
fn panel_starts_out_loading() {
    let panel = CarouselPanel::default();
    assert_eq!(
        panel.view(&800.0_f32),
        CarouselView::Loading {
            message: notices::LOADING
        }
    );
    assert_eq!(panel.update(CarouselMessage::Next), MessageOutcome::Inert);
}

#[tokio::test]
async fn failed_fetch_renders_the_error_placeholder() {
    let mut source = MockSource::new();
    source
        .expect_fetch_items()
        .times(1)
        .returning(|| Err(SourceError::Unavailable("503".into())));

    let panel = CarouselPanel::load(&source, idle_navigator(), quiet_settings()).await;

    assert!(matches!(
        panel,
        CarouselPanel::Failed(CarouselError::Load(SourceError::Unavailable(_)))
    ));
    assert_eq!(
        panel.view(&1280.0_f32),
        CarouselView::Error {
            message: notices::LOAD_FAILED
        }
    );
    assert_eq!(panel.update(CarouselMessage::GoTo(1)), MessageOutcome::Inert);
}

#[tokio::test]
async fn no_ongoing_projects_renders_the_empty_notice() {
    let source = StaticItemSource::new(vec![
        project("a", "2024-01-01", "completed"),
        project("b", "2024-02-01", "upcoming"),
    ]);

    let panel = CarouselPanel::load(&source, idle_navigator(), quiet_settings()).await;

    assert!(matches!(panel, CarouselPanel::Empty));
    assert!(panel.controller().is_none());
    assert_eq!(
        panel.view(&1280.0_f32),
        CarouselView::Empty {
            message: notices::EMPTY
        }
    );
}

#[tokio::test]
async fn ready_panel_renders_a_five_card_frame() {
    let source = StaticItemSource::new(vec![
        project("B", "2024-03-01", "ongoing"),
        project("A", "2024-01-01", "ongoing"),
        project("C", "2024-02-01", "completed"),
    ]);

    let panel = CarouselPanel::load(&source, idle_navigator(), quiet_settings()).await;
    assert!(panel.is_ready());

    let CarouselView::Ready(frame) = panel.view(&1000.0_f32) else {
        panic!("expected a populated carousel");
    };
    assert_eq!(frame.breakpoint, ViewportBreakpoint::Md);
    assert_eq!(frame.cards.len(), 5);
    assert_eq!(frame.indicators.len(), 2);
    assert_eq!(frame.focal_card().unwrap().content.id.as_str(), "B");
    assert!(frame.controls.prev_enabled);
    assert!(!frame.controls.auto_playing);

    let ids: Vec<_> = frame.cards.iter().map(|card| card.actual_index).collect();
    assert_eq!(ids, vec![0, 1, 0, 1, 0]);
}

#[tokio::test]
async fn max_items_caps_the_working_set() {
    let items = (1..=9)
        .map(|day| project(&format!("p{day}"), &format!("2024-05-0{day}"), "ongoing"))
        .collect();
    let settings = CarouselSettings {
        max_items: 4,
        ..quiet_settings()
    };

    let panel =
        CarouselPanel::load(&StaticItemSource::new(items), idle_navigator(), settings).await;
    let controller = panel.controller().expect("ready");
    assert_eq!(controller.len(), 4);
    assert_eq!(controller.focal_item().unwrap().id.as_str(), "p9");
}

#[tokio::test]
async fn oversized_max_items_fails_without_fetching() {
    let mut source = MockSource::new();
    source.expect_fetch_items().never();
    let settings = CarouselSettings {
        max_items: 40,
        ..quiet_settings()
    };

    let panel = CarouselPanel::load(&source, idle_navigator(), settings).await;

    assert!(matches!(
        panel,
        CarouselPanel::Failed(CarouselError::InvalidSettings(
            ConfigGuardRailError::WorkingSetTooLarge { requested: 40, limit: 15 }
        ))
    ));
    assert_eq!(
        panel.view(&1280.0_f32),
        CarouselView::Error {
            message: notices::LOAD_FAILED
        }
    );
}

#[tokio::test]
async fn zero_interval_fails_without_fetching() {
    let mut source = MockSource::new();
    source.expect_fetch_items().never();
    let settings = CarouselSettings {
        autoplay_interval: std::time::Duration::ZERO,
        ..quiet_settings()
    };

    let panel = CarouselPanel::load(&source, idle_navigator(), settings).await;
    assert!(matches!(
        panel,
        CarouselPanel::Failed(CarouselError::InvalidSettings(_))
    ));
}

#[tokio::test]
async fn activating_the_focal_card_opens_its_detail_view() {
    let source = StaticItemSource::new(vec![
        project("x", "2024-03-01", "ongoing"),
        project("y", "2024-02-01", "ongoing"),
        project("z", "2024-01-01", "ongoing"),
    ]);
    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate_to_detail()
        .with(eq(ItemId::new("x").unwrap()))
        .times(1)
        .return_const(());

    let panel = CarouselPanel::load(&source, Arc::new(navigator), quiet_settings()).await;

    assert_eq!(
        panel.update(CarouselMessage::Activate(0)),
        MessageOutcome::Activation(Activation::OpenedDetail(ItemId::new("x").unwrap()))
    );
    // Opening the detail view leaves the carousel where it was.
    let snapshot = panel.controller().unwrap().snapshot();
    assert_eq!(snapshot.focal_index, 0);
    assert!(!snapshot.is_transitioning);
}

#[tokio::test]
async fn activating_a_side_card_moves_without_navigating() {
    let source = StaticItemSource::new(vec![
        project("x", "2024-03-01", "ongoing"),
        project("y", "2024-02-01", "ongoing"),
        project("z", "2024-01-01", "ongoing"),
        project("w", "2023-12-01", "ongoing"),
    ]);

    let panel = CarouselPanel::load(&source, idle_navigator(), quiet_settings()).await;

    assert_eq!(
        panel.update(CarouselMessage::Activate(2)),
        MessageOutcome::Activation(Activation::Navigation(NavigationOutcome::Moved {
            from: 0,
            to: 2
        }))
    );
    assert_eq!(
        panel.update(CarouselMessage::Prev),
        MessageOutcome::Navigation(NavigationOutcome::Ignored(IgnoreReason::Transitioning))
    );
}

#[tokio::test]
async fn messages_route_to_the_controller() {
    let source = StaticItemSource::new(vec![
        project("x", "2024-03-01", "ongoing"),
        project("y", "2024-02-01", "ongoing"),
    ]);

    let panel = CarouselPanel::load(&source, idle_navigator(), quiet_settings()).await;

    assert_eq!(
        panel.update(CarouselMessage::ToggleAutoPlay),
        MessageOutcome::AutoPlay(true)
    );
    assert_eq!(
        panel.update(CarouselMessage::GoTo(1)),
        MessageOutcome::Navigation(NavigationOutcome::Moved { from: 0, to: 1 })
    );

    let CarouselView::Ready(frame) = panel.view(&400.0_f32) else {
        panic!("expected a populated carousel");
    };
    assert!(!frame.controls.next_enabled);
    assert!(frame.indicators[1].active);
}

#[tokio::test]
async fn json_file_source_feeds_the_panel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"[
            {"_id": "old", "title": "Old", "status": "ongoing", "date": "2023-06-01"},
            {"_id": "new", "title": "New", "status": "ongoing", "date": "2024-06-01T10:00:00Z"},
            {"_id": "done", "title": "Done", "status": "completed", "date": "2024-07-01"},
            {"title": "missing id", "status": "ongoing"}
        ]"#,
    )
    .unwrap();

    let panel =
        CarouselPanel::load(&JsonFileSource::new(&path), idle_navigator(), quiet_settings())
            .await;
    let controller = panel.controller().expect("ready");
    assert_eq!(controller.len(), 2);
    assert_eq!(controller.focal_item().unwrap().id.as_str(), "new");
}
