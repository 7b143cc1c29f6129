//! Drives the settings component with key messages the way a terminal would.

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use sectioned_list::prelude::*;
use sectioned_list::sectioned::sample;

fn send(settings: &mut Settings, code: KeyCode) -> Option<Cmd> {
    let msg = Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg;
    settings.update(msg)
}

fn press(settings: &mut Settings, code: KeyCode) -> bool {
    send(settings, code).is_some()
}

async fn delivered<M: Clone + 'static>(cmd: Option<Cmd>) -> M {
    let msg = cmd.expect("command").await.expect("message");
    msg.downcast_ref::<M>().cloned().expect("message type")
}

fn enabled_ids(list: &SectionedSelectableList, section: usize) -> Vec<String> {
    let mut ids: Vec<String> = list
        .enabled_items(section)
        .into_iter()
        .map(|i| i.id.clone())
        .collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn toggled_row_keeps_its_state_when_dragged_to_the_section_edge() {
    let mut settings = Settings::new(sample::sections());
    settings.focus();

    let toggled: ToggledMsg = delivered(send(&mut settings, KeyCode::Char(' '))).await;
    assert_eq!(
        toggled,
        ToggledMsg {
            path: IndexPath::new(0, 0),
            enabled: false,
        }
    );
    assert!(!settings.list().is_enabled(IndexPath::new(0, 0)));

    // Drag far past the end of Topics; the row stops on Topics' last row.
    press(&mut settings, KeyCode::Char('m'));
    for _ in 0..30 {
        press(&mut settings, KeyCode::Down);
    }
    assert_eq!(
        settings.drag().map(|d| d.target),
        Some(IndexPath::new(0, 19))
    );
    let moved: MovedMsg = delivered(send(&mut settings, KeyCode::Enter)).await;
    assert_eq!(
        moved,
        MovedMsg {
            from: IndexPath::new(0, 0),
            to: IndexPath::new(0, 19),
        }
    );

    let list = settings.list();
    assert_eq!(list.item(IndexPath::new(0, 19)).unwrap().title, "World News");
    assert!(!list.is_enabled(IndexPath::new(0, 19)));
    let expected: EnabledIndexSet = (0..19).collect();
    assert_eq!(list.enabled_rows(0), Some(&expected));
    assert_eq!(list.row_count(1), 4);
    assert_eq!(list.enabled_rows(1).map(|s| s.len()), Some(4));
}

#[tokio::test]
async fn markets_rows_cannot_be_dragged_into_topics() {
    let mut settings = Settings::new(sample::sections());
    settings.focus();
    for _ in 0..22 {
        press(&mut settings, KeyCode::Down);
    }
    assert_eq!(settings.cursor(), IndexPath::new(1, 2));

    press(&mut settings, KeyCode::Char('m'));
    for _ in 0..10 {
        press(&mut settings, KeyCode::Up);
    }
    assert_eq!(settings.cursor(), IndexPath::new(1, 0));
    let moved: MovedMsg = delivered(send(&mut settings, KeyCode::Enter)).await;
    assert_eq!(
        moved,
        MovedMsg {
            from: IndexPath::new(1, 2),
            to: IndexPath::new(1, 0),
        }
    );

    let titles: Vec<&str> = settings.list().sections()[1]
        .items
        .iter()
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(titles, ["c", "a", "b", "d"]);
    assert_eq!(settings.list().row_count(0), 20);
}

#[test]
fn state_follows_identity_through_a_session() {
    let mut settings = Settings::new(sample::sections());
    settings.focus();

    // Switch off ids 2 and 4 in Topics.
    press(&mut settings, KeyCode::Down);
    press(&mut settings, KeyCode::Char('x'));
    press(&mut settings, KeyCode::Down);
    press(&mut settings, KeyCode::Down);
    press(&mut settings, KeyCode::Char('x'));

    // Move row 3 (id 4) to the top, then row 5 (id 6) up two.
    press(&mut settings, KeyCode::Char('m'));
    for _ in 0..3 {
        press(&mut settings, KeyCode::Up);
    }
    press(&mut settings, KeyCode::Enter);
    for _ in 0..5 {
        press(&mut settings, KeyCode::Down);
    }
    press(&mut settings, KeyCode::Char('m'));
    press(&mut settings, KeyCode::Up);
    press(&mut settings, KeyCode::Up);
    press(&mut settings, KeyCode::Enter);

    let list = settings.list();
    let expected: Vec<String> = (1..=20)
        .filter(|id| *id != 2 && *id != 4)
        .map(|id| id.to_string())
        .collect();
    let mut expected = expected;
    expected.sort();
    assert_eq!(enabled_ids(list, 0), expected);
    assert_eq!(list.item(IndexPath::new(0, 0)).unwrap().id, "4");
    assert_eq!(list.item(IndexPath::new(0, 3)).unwrap().id, "6");
}

#[test]
fn cancelled_drag_leaves_the_model_alone() {
    let mut settings = Settings::new(sample::sections());
    settings.focus();
    let before = settings.list().clone();

    press(&mut settings, KeyCode::Char('m'));
    press(&mut settings, KeyCode::Down);
    press(&mut settings, KeyCode::Down);
    assert!(!press(&mut settings, KeyCode::Esc));

    assert_eq!(settings.list(), &before);
    assert!(!settings.is_dragging());
}
