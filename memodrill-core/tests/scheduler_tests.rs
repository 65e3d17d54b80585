use chrono::NaiveDate;
use memodrill_core::{Item, ItemState, Quality, EF_DEFAULT};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn q(v: u8) -> Quality {
    Quality::try_from(v).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn perfect_streak() {
    let mut item = Item::create("hola", "hello", today());
    let expected = [(2.6, 1, 1), (2.7, 2, 6), (2.8, 3, 16), (2.9, 4, 45)];

    for (ef, reps, interval) in expected {
        item.assess(q(5), today());
        assert!(close(item.easiness(), ef), "ef {} != {}", item.easiness(), ef);
        assert_eq!(item.repetitions(), reps);
        assert_eq!(item.interval(), interval);
    }
    assert_eq!(item.state(), ItemState::Mature);
}

#[test]
fn lapse_resets_streak() {
    let mut item = Item::create("x", "y", today());
    item.assess(q(5), today());
    item.assess(q(4), today());
    assert_eq!(item.repetitions(), 2);

    item.assess(q(1), today());
    assert_eq!(item.repetitions(), 0);
    assert_eq!(item.interval(), 0);
    assert_eq!(item.state(), ItemState::New);

    // recovery starts over at one day
    item.assess(q(4), today());
    assert_eq!(item.repetitions(), 1);
    assert_eq!(item.interval(), 1);
}

#[test]
fn blackout_from_default_easiness() {
    let mut item = Item::create("a", "b", today());
    item.assess(q(0), today());
    assert!(close(item.easiness(), 1.7));
    for _ in 0..5 {
        item.assess(q(0), today());
    }
    assert_eq!(item.easiness(), 1.3);
}

#[test]
fn fresh_item_round_trips_through_record() {
    let item = Item::create("Capital of Ontario?", "Toronto", today());
    let record = item.dump();
    assert_eq!(record.easiness, "2.500000");

    let back = Item::try_from(record).unwrap();
    assert_eq!(back.easiness(), EF_DEFAULT);
    assert_eq!(back.repetitions(), 0);
    assert_eq!(back.interval(), 0);
    assert_eq!(back, item);
}

#[test]
fn reviewed_item_round_trips_to_six_decimals() {
    let mut item = Item::create("q", "a", today());
    for g in [5, 3, 4, 2, 5, 5] {
        item.assess(q(g), today());
    }
    let back = Item::try_from(item.dump()).unwrap();
    assert!((back.easiness() - item.easiness()).abs() < 1e-6);
    assert_eq!(back.repetitions(), item.repetitions());
    assert_eq!(back.interval(), item.interval());
    assert_eq!(back.last_reviewed(), item.last_reviewed());
}

#[test]
fn correct_answer_schedules_into_future() {
    let mut ok = Item::create("Capital of Canada?", "Ottawa", today());
    ok.assess(q(5), today());
    assert!(!ok.is_due(today()));
    assert!(!ok.is_due(today().succ_opt().unwrap()));
    assert!(ok.is_due(today() + chrono::Days::new(2)));

    let mut miss = Item::create("Capital of Ontario?", "Toronto", today());
    miss.assess(q(0), today());
    assert!(!miss.is_due(today()));
    assert!(miss.is_due(today().succ_opt().unwrap()));
}
