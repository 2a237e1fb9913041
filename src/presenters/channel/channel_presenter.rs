use std::sync::mpsc::{self, Receiver, Sender};

use tracing::warn;

use crate::controllers::background::events::AtlasEvent;
use crate::controllers::background::ports::presenter::AtlasPresenterPort;

/// Forwards background controller events into an `mpsc` channel so a caller
/// can block on, or poll for, the response.
pub struct ChannelPresenter {
    sender: Sender<AtlasEvent>,
}

impl ChannelPresenter {
    pub fn channel() -> (Self, Receiver<AtlasEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl AtlasPresenterPort for ChannelPresenter {
    fn present(&self, event: AtlasEvent) {
        if let Err(mpsc::SendError(event)) = self.sender.send(event) {
            warn!(generation = event.generation(), "atlas receiver dropped, discarding event");
        }
    }
}
