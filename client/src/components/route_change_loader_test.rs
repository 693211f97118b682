use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Stand-in timer that counts how many times it was dropped (cancelled).
struct CountingTimer {
    ticket: TransitionTicket,
    drops: Rc<Cell<u32>>,
}

impl Drop for CountingTimer {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn schedule(drops: &Rc<Cell<u32>>) -> impl FnOnce(TransitionTicket) -> CountingTimer {
    let drops = drops.clone();
    move |ticket| CountingTimer { ticket, drops }
}

fn pending_ticket(pending: StoredValue<Option<CountingTimer>, LocalStorage>) -> Option<TransitionTicket> {
    pending.with_value(|slot| slot.as_ref().map(|timer| timer.ticket))
}

#[test]
fn navigation_arms_one_timer() {
    let owner = Owner::new();
    owner.with(|| {
        let site = RwSignal::new(SiteStatus::new(true));
        let pending = StoredValue::new_local(None::<CountingTimer>);
        let drops = Rc::new(Cell::new(0));

        rearm(site, pending, "/services", schedule(&drops));

        assert!(site.with(SiteStatus::is_transitioning));
        assert!(pending_ticket(pending).is_some());
        assert_eq!(drops.get(), 0);
    });
}

#[test]
fn second_navigation_replaces_and_cancels_pending_timer() {
    let owner = Owner::new();
    owner.with(|| {
        let site = RwSignal::new(SiteStatus::new(true));
        let pending = StoredValue::new_local(None::<CountingTimer>);
        let drops = Rc::new(Cell::new(0));

        rearm(site, pending, "/services", schedule(&drops));
        let first = pending_ticket(pending).unwrap();
        rearm(site, pending, "/about", schedule(&drops));
        let second = pending_ticket(pending).unwrap();

        assert_eq!(drops.get(), 1);
        assert_ne!(first, second);
        // The replaced timer's ticket is stale even if its callback ran late.
        assert!(!site.try_update(|s| s.finish_transition(first)).unwrap());
        assert!(site.try_update(|s| s.finish_transition(second)).unwrap());
        assert!(!site.with(SiteStatus::is_transitioning));
    });
}

#[test]
fn repeating_current_path_keeps_pending_timer() {
    let owner = Owner::new();
    owner.with(|| {
        let site = RwSignal::new(SiteStatus::new(true));
        let pending = StoredValue::new_local(None::<CountingTimer>);
        let drops = Rc::new(Cell::new(0));

        rearm(site, pending, "/contact", schedule(&drops));
        let first = pending_ticket(pending);
        rearm(site, pending, "/contact", schedule(&drops));

        assert_eq!(drops.get(), 0);
        assert_eq!(pending_ticket(pending), first);
    });
}

#[test]
fn offline_navigation_arms_nothing() {
    let owner = Owner::new();
    owner.with(|| {
        let site = RwSignal::new(SiteStatus::new(false));
        let pending = StoredValue::new_local(None::<CountingTimer>);
        let drops = Rc::new(Cell::new(0));

        rearm(site, pending, "/portfolio", schedule(&drops));

        assert!(pending_ticket(pending).is_none());
        assert!(!site.with(SiteStatus::is_transitioning));
    });
}

#[test]
fn disarm_cancels_timer_and_transition() {
    let owner = Owner::new();
    owner.with(|| {
        let site = RwSignal::new(SiteStatus::new(true));
        let pending = StoredValue::new_local(None::<CountingTimer>);
        let drops = Rc::new(Cell::new(0));

        rearm(site, pending, "/ai-waitlist", schedule(&drops));
        let ticket = pending_ticket(pending).unwrap();
        disarm(site, pending);

        assert_eq!(drops.get(), 1);
        assert!(pending_ticket(pending).is_none());
        assert!(!site.with(SiteStatus::is_transitioning));
        assert!(!site.try_update(|s| s.finish_transition(ticket)).unwrap());
    });
}
