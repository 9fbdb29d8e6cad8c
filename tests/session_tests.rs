//! Tests for the dessert session state machine
//!
//! These tests verify:
//! - Initial state derived from the first catalog entry
//! - Counter accounting across advances
//! - End-of-catalog behavior for both policies
//! - Observer delivery and unsubscription

use std::cell::RefCell;
use std::rc::Rc;

use dessert_clicker::catalog::{Catalog, Dessert, DessertImage};
use dessert_clicker::session::{DessertSession, EndPolicy, SessionState};

fn one_to_five() -> Catalog {
    Catalog::new(vec![
        Dessert::new(1, DessertImage::Cupcake),
        Dessert::new(2, DessertImage::Donut),
        Dessert::new(3, DessertImage::Eclair),
        Dessert::new(4, DessertImage::Froyo),
        Dessert::new(5, DessertImage::Gingerbread),
    ])
    .unwrap()
}

fn assert_matches_catalog(session: &DessertSession) {
    let state = session.current_state();
    let dessert = session.catalog().get(state.current_index).unwrap();
    assert_eq!(state.current_price, dessert.price);
    assert_eq!(state.current_image, dessert.image);
    assert_eq!(session.current_dessert(), dessert);
}

// =============================================================================
// Initial State
// =============================================================================

#[test]
fn test_initial_state_is_first_dessert() {
    let session = DessertSession::new(Catalog::builtin(), EndPolicy::default());
    let state = session.current_state();
    assert_eq!(state.desserts_sold, 0);
    assert_eq!(state.revenue, 0);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.current_price, 5);
    assert_eq!(state.current_image, DessertImage::Cupcake);
}

#[test]
fn test_session_keeps_its_end_policy() {
    for policy in [EndPolicy::Wrap, EndPolicy::Clamp] {
        let mut session = DessertSession::new(one_to_five(), policy);
        assert_eq!(session.end_policy(), policy);
        for _ in 0..7 {
            session.advance();
        }
        assert_eq!(session.end_policy(), policy);
    }
}

#[test]
fn test_current_dessert_follows_the_index() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    assert_eq!(*session.current_dessert(), Dessert::new(1, DessertImage::Cupcake));
    session.advance();
    assert_eq!(*session.current_dessert(), Dessert::new(2, DessertImage::Donut));
}

#[test]
fn test_default_policy_is_wrap() {
    assert_eq!(EndPolicy::default(), EndPolicy::Wrap);
}

#[test]
fn test_current_state_is_idempotent() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    session.advance();
    let first = session.current_state();
    for _ in 0..10 {
        assert_eq!(session.current_state(), first);
    }
}

// =============================================================================
// End of Catalog
// =============================================================================

#[test]
fn test_five_advances_wrap_to_start() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    for _ in 0..5 {
        session.advance();
        assert_matches_catalog(&session);
    }
    let state = session.current_state();
    assert_eq!(state.desserts_sold, 5);
    assert_eq!(state.revenue, 15);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.current_price, 1);
}

#[test]
fn test_five_advances_clamp_to_last() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Clamp);
    for _ in 0..5 {
        session.advance();
        assert_matches_catalog(&session);
    }
    let state = session.current_state();
    assert_eq!(state.desserts_sold, 5);
    assert_eq!(state.revenue, 15);
    assert_eq!(state.current_index, 4);
    assert_eq!(state.current_price, 5);
}

#[test]
fn test_clamp_keeps_selling_last_dessert() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Clamp);
    for _ in 0..8 {
        session.advance();
    }
    // 1+2+3+4 then the $5 dessert four times
    assert_eq!(session.current_state().revenue, 10 + 5 * 4);
    assert_eq!(session.current_state().current_index, 4);
}

#[test]
fn test_wrap_second_lap() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    for _ in 0..12 {
        session.advance();
        assert_matches_catalog(&session);
    }
    // two full laps plus 1+2
    assert_eq!(session.current_state().revenue, 15 * 2 + 3);
    assert_eq!(session.current_state().current_index, 2);
}

#[test]
fn test_advance_far_past_catalog_length() {
    for policy in [EndPolicy::Wrap, EndPolicy::Clamp] {
        let mut session = DessertSession::new(Catalog::builtin(), policy);
        for _ in 0..1000 {
            session.advance();
        }
        assert_eq!(session.current_state().desserts_sold, 1000);
        assert_matches_catalog(&session);
    }
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn test_channel_observer_receives_every_snapshot() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    let (_subscription, rx) = session.subscribe_channel();

    session.advance();
    session.advance();

    let snapshots: Vec<SessionState> = rx.try_iter().collect();
    let sold: Vec<u64> = snapshots.iter().map(|s| s.desserts_sold).collect();
    assert_eq!(sold, vec![0, 1, 2]);
    assert_eq!(snapshots.last().copied(), Some(session.current_state()));
}

#[test]
fn test_unsubscribed_channel_sees_nothing_more() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    let (subscription, rx) = session.subscribe_channel();
    session.advance();
    assert_eq!(rx.try_iter().count(), 2);

    assert!(session.unsubscribe(subscription));
    assert_eq!(session.observer_count(), 0);
    session.advance();
    // the sender is gone with the observer
    assert!(rx.try_recv().is_err());
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn test_unsubscribed_callback_sees_nothing_more() {
    let seen = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&seen);

    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    let subscription = session.subscribe(move |_| *counter.borrow_mut() += 1);
    session.advance();
    assert_eq!(*seen.borrow(), 2);

    assert!(session.unsubscribe(subscription));
    session.advance();
    assert_eq!(*seen.borrow(), 2);
    assert_eq!(session.observer_count(), 0);
}

#[test]
fn test_multiple_observers_see_same_snapshot() {
    let a = Rc::new(RefCell::new(Vec::new()));
    let b = Rc::new(RefCell::new(Vec::new()));
    let (sink_a, sink_b) = (Rc::clone(&a), Rc::clone(&b));

    let mut session = DessertSession::new(one_to_five(), EndPolicy::Clamp);
    let _sa = session.subscribe(move |s| sink_a.borrow_mut().push(*s));
    let _sb = session.subscribe(move |s| sink_b.borrow_mut().push(*s));

    for _ in 0..6 {
        session.advance();
    }
    assert_eq!(*a.borrow(), *b.borrow());
    assert_eq!(a.borrow().len(), 7);
}

#[test]
fn test_observer_cannot_change_session() {
    let mut session = DessertSession::new(one_to_five(), EndPolicy::Wrap);
    let _sub = session.subscribe(|snapshot| {
        let mut copy = *snapshot;
        copy.revenue = 999;
        assert_eq!(copy.revenue, 999);
    });
    session.advance();
    assert_eq!(session.current_state().revenue, 1);
}
