// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

/// A generic, thread-safe event channel.
///
/// Any number of producers can publish through cloned senders, and any number
/// of consumers can [`subscribe`](EventBus::subscribe). Each event is delivered
/// to exactly one receiver.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new EventBus backed by an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("Profile EventBus initialized.");
        Self { sender, receiver }
    }

    /// Publishes an event. A bus always owns a receiver, so this only fails
    /// if the bus is being torn down, in which case the event is logged and lost.
    pub fn publish(&self, event: T) {
        log::trace!("Publishing a profile event.");

        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to publish event: {e}.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a new handle on the receiving end of the channel.
    pub fn subscribe(&self) -> flume::Receiver<T> {
        self.receiver.clone()
    }

    /// Removes and returns every event currently queued.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Waits up to `timeout` for the next event.
    pub fn next_timeout(&self, timeout: Duration) -> Option<T> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ProfileEvent;
    use crate::identity::UserId;
    use std::thread;

    fn ready(id: u32) -> ProfileEvent {
        ProfileEvent::FriendsListReady {
            id: UserId::new(id),
            friend_count: 0,
        }
    }

    #[test]
    fn drain_returns_events_in_publish_order() {
        let bus = EventBus::<ProfileEvent>::new();
        bus.publish(ready(1));
        bus.publish(ready(2));

        let events = bus.drain();
        assert_eq!(events, vec![ready(1), ready(2)]);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn publish_from_completion_thread() {
        let bus = EventBus::<ProfileEvent>::new();
        let sender = bus.sender();

        let handle = thread::spawn(move || {
            sender.send(ready(7)).expect("Send from thread failed");
        });

        let event = bus
            .next_timeout(Duration::from_secs(1))
            .expect("Event should arrive");
        assert_eq!(event.id(), UserId::new(7));
        handle.join().expect("Thread join failed");
    }

    #[test]
    fn subscriber_shares_the_queue() {
        let bus = EventBus::<ProfileEvent>::new();
        let subscriber = bus.subscribe();
        bus.publish(ready(3));

        assert_eq!(subscriber.try_recv().ok(), Some(ready(3)));
        assert!(bus.next_timeout(Duration::from_millis(10)).is_none());
    }
}
