//=========================================================================
// Request Collector
//=========================================================================
//
// Queued navigation requests with bounded draining.
//
// Architecture:
//   StageHandle (any number, cloneable)
//        └─ try_send() → bounded channel → RequestCollector::collect()
//                                               ↓
//                              StageController::process_requests()
//
// Scenes cannot borrow the controller while it is calling into them, so
// they ask for navigation through a handle instead. Requests are applied
// in FIFO order at the next event boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::fmt;

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::StageError;
use crate::core::scene::{SceneKey, SceneTag};
use crate::stage::Launch;

//=== NavigationRequest ===================================================

/// A navigation step requested through a [`StageHandle`].
pub enum NavigationRequest<K, S> {
    /// Start a scene, as `StageController::start_scene`.
    Start(Launch<K, S>),

    /// Finish the scene with this tag, as `StageController::finish_scene`.
    Finish(SceneTag),

    /// Behave as if the user pressed back.
    Back,
}

impl<K: fmt::Debug, S> fmt::Debug for NavigationRequest<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start(launch) => f.debug_tuple("Start").field(launch).finish(),
            Self::Finish(tag) => f.debug_tuple("Finish").field(tag).finish(),
            Self::Back => f.write_str("Back"),
        }
    }
}

//=== StageHandle =========================================================

/// Cloneable sender for navigation requests.
pub struct StageHandle<K, S> {
    sender: Sender<NavigationRequest<K, S>>,
}

impl<K: SceneKey, S> StageHandle<K, S> {
    pub(crate) fn new(sender: Sender<NavigationRequest<K, S>>) -> Self {
        Self { sender }
    }

    /// Queues `request`.
    ///
    /// Fails with [`StageError::RequestQueueFull`] when the queue is at
    /// capacity, and [`StageError::StageClosed`] once the stage is gone.
    pub fn request(&self, request: NavigationRequest<K, S>) -> Result<(), StageError> {
        self.sender.try_send(request).map_err(|e| match e {
            TrySendError::Full(_) => StageError::RequestQueueFull,
            TrySendError::Disconnected(_) => StageError::StageClosed,
        })
    }

    /// Queues a plain start of `key`.
    pub fn start(&self, key: K) -> Result<(), StageError> {
        self.request(NavigationRequest::Start(Launch::new(key)))
    }

    /// Queues a fully configured launch.
    pub fn launch(&self, launch: Launch<K, S>) -> Result<(), StageError> {
        self.request(NavigationRequest::Start(launch))
    }

    /// Queues finishing the scene tagged `tag`.
    pub fn finish(&self, tag: SceneTag) -> Result<(), StageError> {
        self.request(NavigationRequest::Finish(tag))
    }

    /// Queues a back press.
    pub fn back(&self) -> Result<(), StageError> {
        self.request(NavigationRequest::Back)
    }
}

impl<K, S> Clone for StageHandle<K, S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<K, S> fmt::Debug for StageHandle<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageHandle")
            .field("pending", &self.sender.len())
            .finish()
    }
}

//=== RequestCollector ====================================================

/// Drains queued requests, a bounded number per pass.
///
/// Requests handed back with [`RequestCollector::requeue_front`] are held
/// locally and always come out before anything still in the channel.
pub(crate) struct RequestCollector<K, S> {
    receiver: Receiver<NavigationRequest<K, S>>,
    held: VecDeque<NavigationRequest<K, S>>,
}

impl<K, S> RequestCollector<K, S> {
    /// Upper bound on requests applied in a single pass.
    ///
    /// Requests queued while a pass runs wait for the next one, so a
    /// scene that keeps re-queueing cannot starve the host.
    pub(crate) const MAX_REQUESTS_PER_PASS: usize = 64;

    pub(crate) fn new(receiver: Receiver<NavigationRequest<K, S>>) -> Self {
        Self {
            receiver,
            held: VecDeque::new(),
        }
    }

    /// Takes up to `MAX_REQUESTS_PER_PASS` pending requests, oldest first.
    pub(crate) fn collect(&mut self) -> Vec<NavigationRequest<K, S>> {
        let take = self.held.len().min(Self::MAX_REQUESTS_PER_PASS);
        let mut requests: Vec<_> = self.held.drain(..take).collect();

        while requests.len() < Self::MAX_REQUESTS_PER_PASS {
            match self.receiver.try_recv() {
                Ok(request) => requests.push(request),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if requests.len() >= Self::MAX_REQUESTS_PER_PASS && self.pending() > 0 {
            warn!(
                "Navigation request backlog: {} requests left for the next pass",
                self.pending()
            );
        }

        requests
    }

    /// Puts `requests` back ahead of everything still pending, keeping
    /// their order.
    pub(crate) fn requeue_front<I>(&mut self, requests: I)
    where
        I: IntoIterator<Item = NavigationRequest<K, S>>,
        I::IntoIter: DoubleEndedIterator,
    {
        for request in requests.into_iter().rev() {
            self.held.push_front(request);
        }
    }

    /// Number of requests waiting.
    pub(crate) fn pending(&self) -> usize {
        self.held.len() + self.receiver.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Screen {
        List,
        Detail,
    }

    impl SceneKey for Screen {}

    fn channel(capacity: usize) -> (StageHandle<Screen, ()>, RequestCollector<Screen, ()>) {
        let (tx, rx) = bounded(capacity);
        (StageHandle::new(tx), RequestCollector::new(rx))
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_handle, mut collector) = channel(4);
        assert!(collector.collect().is_empty());
    }

    #[test]
    fn collect_preserves_fifo_order() {
        let (handle, mut collector) = channel(8);

        handle.start(Screen::List).unwrap();
        handle.start(Screen::Detail).unwrap();
        handle.finish(SceneTag::from_id(1)).unwrap();
        handle.back().unwrap();

        let requests = collector.collect();
        assert_eq!(requests.len(), 4);
        assert!(matches!(&requests[0], NavigationRequest::Start(l) if l.key() == Screen::List));
        assert!(matches!(&requests[1], NavigationRequest::Start(l) if l.key() == Screen::Detail));
        assert!(matches!(&requests[2], NavigationRequest::Finish(t) if t.as_str() == "1"));
        assert!(matches!(&requests[3], NavigationRequest::Back));
        assert_eq!(collector.pending(), 0);
    }

    #[test]
    fn full_queue_is_reported() {
        let (handle, _collector) = channel(1);

        handle.back().unwrap();
        assert_eq!(handle.back(), Err(StageError::RequestQueueFull));
    }

    #[test]
    fn dropped_collector_closes_handles() {
        let (handle, collector) = channel(4);
        drop(collector);

        assert_eq!(handle.back(), Err(StageError::StageClosed));
    }

    #[test]
    fn collect_is_bounded_per_pass() {
        let max = RequestCollector::<Screen, ()>::MAX_REQUESTS_PER_PASS;
        let (handle, mut collector) = channel(max + 10);

        for _ in 0..max + 10 {
            handle.back().unwrap();
        }

        assert_eq!(collector.collect().len(), max);
        assert_eq!(collector.pending(), 10);
        assert_eq!(collector.collect().len(), 10);
    }

    #[test]
    fn requeued_requests_come_before_the_channel() {
        let (handle, mut collector) = channel(4);

        handle.start(Screen::List).unwrap();
        handle.start(Screen::Detail).unwrap();
        let mut first = collector.collect();
        let rest = first.split_off(1);

        handle.back().unwrap();
        collector.requeue_front(rest);
        collector.requeue_front(first);
        assert_eq!(collector.pending(), 3);

        let requests = collector.collect();
        assert!(matches!(&requests[0], NavigationRequest::Start(l) if l.key() == Screen::List));
        assert!(matches!(&requests[1], NavigationRequest::Start(l) if l.key() == Screen::Detail));
        assert!(matches!(&requests[2], NavigationRequest::Back));
    }

    #[test]
    fn requeued_requests_respect_the_pass_limit() {
        let max = RequestCollector::<Screen, ()>::MAX_REQUESTS_PER_PASS;
        let (handle, mut collector) = channel(4);

        collector.requeue_front(
            (0..=max as u32).map(|id| NavigationRequest::Finish(SceneTag::from_id(id))),
        );
        handle.back().unwrap();

        let first = collector.collect();
        assert_eq!(first.len(), max);
        assert!(matches!(&first[0], NavigationRequest::Finish(t) if t.as_str() == "0"));

        let second = collector.collect();
        assert_eq!(second.len(), 2);
        assert!(matches!(&second[0], NavigationRequest::Finish(t) if t.as_str() == max.to_string()));
        assert!(matches!(&second[1], NavigationRequest::Back));
    }

    #[test]
    fn cloned_handles_share_the_queue() {
        let (handle, mut collector) = channel(4);
        let other = handle.clone();

        handle.back().unwrap();
        other.start(Screen::List).unwrap();

        assert_eq!(collector.collect().len(), 2);
    }
}
