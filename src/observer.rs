//! Observer: bidders hear from the auctioneer whenever a new highest bid arrives.
//!
//! Run with: cargo run --bin observer_demo

use std::io::Write;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, trace};

use crate::Result;

// =============================================================================
// Bids and their id sequence
// =============================================================================

/// Hands out bid ids `1, 2, 3, ...`.
#[derive(Debug)]
pub struct BidIds {
    next: AtomicU32,
}

impl BidIds {
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }

    fn issue(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for BidIds {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide sequence used by [`Bid::new`].
static BID_IDS: BidIds = BidIds::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bid {
    pub amount: i32,
    pub id: u32,
}

impl Bid {
    pub fn new(amount: i32) -> Self {
        Self::issued_by(&BID_IDS, amount)
    }

    pub fn issued_by(ids: &BidIds, amount: i32) -> Self {
        let id = ids.issue();
        trace!(id, amount, "bid issued");
        Self { amount, id }
    }
}

// =============================================================================
// Subject
// =============================================================================

pub trait Observer {
    fn update(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

/// Receives bids, tracks the highest one and tells subscribers when it rises.
///
/// The highest bid starts at 0, so zero and negative bids are recorded but never announced.
#[derive(Default)]
pub struct Auctioneer {
    bids: Vec<Bid>,
    highest_bid: i32,
    changed: bool,
    observers: Vec<Rc<dyn Observer>>,
}

impl Auctioneer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Removes every subscription of `observer`.
    pub fn delete_observer(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn count_observers(&self) -> usize {
        self.observers.len()
    }

    pub fn set_changed(&mut self) {
        self.changed = true;
    }

    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Delivers `message` in subscription order, but only if the state was marked changed.
    pub fn notify_observers(&mut self, message: &str, out: &mut dyn Write) -> Result<()> {
        if !self.changed {
            trace!("nothing changed, skipping notification");
            return Ok(());
        }
        self.clear_changed();

        for observer in &self.observers {
            observer.update(message, out)?;
        }
        Ok(())
    }

    pub fn receive_bid(&mut self, bid: Bid, out: &mut dyn Write) -> Result<()> {
        self.bids.push(bid);

        if bid.amount > self.highest_bid {
            debug!(amount = bid.amount, id = bid.id, "new highest bid");
            self.highest_bid = bid.amount;
            self.set_changed();
            let message = format!("The highest bid is now {} with ID: {}", bid.amount, bid.id);
            self.notify_observers(&message, out)?;
        }
        Ok(())
    }

    pub fn highest_bid(&self) -> i32 {
        self.highest_bid
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }
}

// =============================================================================
// Observers and the auction that wires them up
// =============================================================================

#[derive(Debug, Default)]
pub struct Bidder;

impl Bidder {
    pub fn new() -> Self {
        Self
    }

    pub fn make_bid(&self, amount: i32) -> Bid {
        Bid::new(amount)
    }

    pub fn make_bid_from(&self, ids: &BidIds, amount: i32) -> Bid {
        Bid::issued_by(ids, amount)
    }
}

impl Observer for Bidder {
    fn update(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{message}")?;
        Ok(())
    }
}

/// An auction owns its auctioneer; every bidder that joins also subscribes to it.
#[derive(Default)]
pub struct Auction {
    pub auctioneer: Auctioneer,
    bidders: Vec<Rc<Bidder>>,
}

impl Auction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bidder(&mut self, bidder: Rc<Bidder>) {
        self.auctioneer.add_observer(bidder.clone());
        self.bidders.push(bidder);
    }

    pub fn bidders(&self) -> &[Rc<Bidder>] {
        &self.bidders
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run(out: &mut dyn Write) -> Result<()> {
    run_with_ids(&BID_IDS, out)
}

/// Runs the auction drawing bid ids from `ids`.
pub fn run_with_ids(ids: &BidIds, out: &mut dyn Write) -> Result<()> {
    let mut auction = Auction::new();
    let bidder1 = Rc::new(Bidder::new());
    let bidder2 = Rc::new(Bidder::new());

    auction.add_bidder(Rc::clone(&bidder1));
    auction.add_bidder(Rc::clone(&bidder2));

    // Each higher bid reaches every bidder automatically
    auction.auctioneer.receive_bid(bidder1.make_bid_from(ids, 50), out)?;
    auction.auctioneer.receive_bid(bidder2.make_bid_from(ids, 70), out)?;
    auction.auctioneer.receive_bid(bidder1.make_bid_from(ids, 100), out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        messages: RefCell<Vec<String>>,
    }

    impl Observer for Recorder {
        fn update(&self, message: &str, _out: &mut dyn Write) -> Result<()> {
            self.messages.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_private_sequence_starts_at_one() {
        let ids = BidIds::new();
        let bids: Vec<u32> = (0..4).map(|_| Bid::issued_by(&ids, 10).id).collect();
        assert_eq!(bids, [1, 2, 3, 4]);
    }

    #[test]
    fn test_global_ids_strictly_increase() {
        let first = Bid::new(1);
        let second = Bidder::new().make_bid(1);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_only_strictly_higher_bids_notify() {
        let ids = BidIds::new();
        let recorder = Rc::new(Recorder::default());
        let mut auctioneer = Auctioneer::new();
        auctioneer.add_observer(recorder.clone());

        let mut out = Vec::<u8>::new();
        for amount in [30, 30, 20, 40] {
            auctioneer.receive_bid(Bid::issued_by(&ids, amount), &mut out).unwrap();
        }

        assert_eq!(auctioneer.bids().len(), 4);
        assert_eq!(auctioneer.highest_bid(), 40);
        assert_eq!(
            *recorder.messages.borrow(),
            [
                "The highest bid is now 30 with ID: 1",
                "The highest bid is now 40 with ID: 4",
            ]
        );
        assert!(!auctioneer.has_changed());
    }

    #[test]
    fn test_zero_bid_never_notifies() {
        let recorder = Rc::new(Recorder::default());
        let mut auctioneer = Auctioneer::new();
        auctioneer.add_observer(recorder.clone());

        auctioneer.receive_bid(Bid::issued_by(&BidIds::new(), 0), &mut std::io::sink()).unwrap();
        assert_eq!(auctioneer.highest_bid(), 0);
        assert!(recorder.messages.borrow().is_empty());
    }

    #[test]
    fn test_negative_bids_are_recorded_but_never_notify() {
        let ids = BidIds::new();
        let recorder = Rc::new(Recorder::default());
        let mut auctioneer = Auctioneer::new();
        auctioneer.add_observer(recorder.clone());

        for amount in [-5, -1, 3] {
            auctioneer.receive_bid(Bid::issued_by(&ids, amount), &mut std::io::sink()).unwrap();
        }

        assert_eq!(auctioneer.bids().len(), 3);
        assert_eq!(auctioneer.bids()[0].amount, -5);
        assert_eq!(auctioneer.highest_bid(), 3);
        assert_eq!(*recorder.messages.borrow(), ["The highest bid is now 3 with ID: 3"]);
    }

    #[test]
    fn test_notify_requires_changed_flag() {
        let recorder = Rc::new(Recorder::default());
        let mut auctioneer = Auctioneer::new();
        auctioneer.add_observer(recorder.clone());

        auctioneer.notify_observers("ignored", &mut std::io::sink()).unwrap();
        assert!(recorder.messages.borrow().is_empty());

        auctioneer.set_changed();
        auctioneer.notify_observers("delivered", &mut std::io::sink()).unwrap();
        auctioneer.notify_observers("ignored again", &mut std::io::sink()).unwrap();
        assert_eq!(*recorder.messages.borrow(), ["delivered"]);
    }

    #[test]
    fn test_delete_observer_and_double_subscription() {
        let recorder: Rc<dyn Observer> = Rc::new(Recorder::default());
        let mut auctioneer = Auctioneer::new();
        auctioneer.add_observer(Rc::clone(&recorder));
        auctioneer.add_observer(Rc::clone(&recorder));
        auctioneer.add_observer(Rc::new(Bidder::new()));
        assert_eq!(auctioneer.count_observers(), 3);

        auctioneer.delete_observer(&recorder);
        assert_eq!(auctioneer.count_observers(), 1);
    }

    #[test]
    fn test_auction_subscribes_bidders() {
        let mut auction = Auction::new();
        auction.add_bidder(Rc::new(Bidder::new()));
        auction.add_bidder(Rc::new(Bidder::new()));

        assert_eq!(auction.bidders().len(), 2);
        assert_eq!(auction.auctioneer.count_observers(), 2);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run_with_ids(&BidIds::new(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The highest bid is now 50 with ID: 1\n\
             The highest bid is now 50 with ID: 1\n\
             The highest bid is now 70 with ID: 2\n\
             The highest bid is now 70 with ID: 2\n\
             The highest bid is now 100 with ID: 3\n\
             The highest bid is now 100 with ID: 3\n"
        );
    }

    proptest! {
        #[test]
        fn test_highest_bid_is_running_maximum(amounts in prop::collection::vec(-500i32..500, 0..40)) {
            let ids = BidIds::new();
            let recorder = Rc::new(Recorder::default());
            let mut auctioneer = Auctioneer::new();
            auctioneer.add_observer(recorder.clone());

            let mut expected_notifications = 0;
            let mut running_max = 0;
            for amount in &amounts {
                if *amount > running_max {
                    running_max = *amount;
                    expected_notifications += 1;
                }
                auctioneer.receive_bid(Bid::issued_by(&ids, *amount), &mut std::io::sink()).unwrap();
            }

            prop_assert_eq!(auctioneer.highest_bid(), amounts.iter().copied().max().unwrap_or(0).max(0));
            prop_assert_eq!(recorder.messages.borrow().len(), expected_notifications);

            let issued: Vec<u32> = auctioneer.bids().iter().map(|b| b.id).collect();
            let consecutive: Vec<u32> = (1..=amounts.len() as u32).collect();
            prop_assert_eq!(issued, consecutive);
        }
    }
}
