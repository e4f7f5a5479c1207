//! Change notifications.

use crossbeam_channel::{Receiver, Sender};

/// What changed in a knot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnotEvent {
    /// The committed edge cycle changed (a move or a recolor).
    EdgesChanged,
    /// The set of selected edges changed.
    SelectionChanged,
}

/// Fan-out list of event channels.
///
/// Channels are unbounded, so emitting never blocks. A subscriber whose
/// receiver was dropped is pruned on the next emit.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<KnotEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> Receiver<KnotEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.senders.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: KnotEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
