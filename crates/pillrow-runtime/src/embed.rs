#![forbid(unsafe_code)]

//! Height negotiation between a host pane and embedded content.
//!
//! The host cannot measure inside the embedded frame, so the two sides
//! exchange messages: the host asks for a height whenever its own
//! width changes, the content replies with its rendered height, and
//! announces it unprompted on mount. The host presents nothing until
//! the first report arrives, so the frame never flashes at a default
//! height.
//!
//! Both ends are plain state machines; the transport between them is
//! the caller's concern.

use tracing::trace;

/// A message between an [`EmbedHost`] and its [`EmbedContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedMessage {
    /// Host asks the content to re-report its height.
    ResizeRequest,
    /// Content reports its rendered height in layout units.
    HeightReport { height: u16 },
}

/// The embedded side: knows its own rendered height and answers the
/// host's requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedContent {
    height: u16,
}

impl EmbedContent {
    /// Content whose current rendered height is `height`.
    #[must_use]
    pub fn new(height: u16) -> Self {
        Self { height }
    }

    /// The unprompted report sent once on mount, so the host can
    /// present without waiting for a resize.
    #[must_use]
    pub fn announce(&self) -> EmbedMessage {
        EmbedMessage::HeightReport {
            height: self.height,
        }
    }

    /// Update the rendered height after the content itself reflows.
    /// Returns the report to forward to the host.
    pub fn set_height(&mut self, height: u16) -> EmbedMessage {
        self.height = height;
        self.announce()
    }

    /// Handle a message from the host. A `ResizeRequest` yields a
    /// fresh report; anything else is ignored.
    pub fn handle(&mut self, message: &EmbedMessage) -> Option<EmbedMessage> {
        match message {
            EmbedMessage::ResizeRequest => Some(self.announce()),
            EmbedMessage::HeightReport { .. } => None,
        }
    }
}

/// The hosting side: tracks its own width, asks the content to
/// re-measure on resize, and applies reported heights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedHost {
    container_width: Option<u16>,
    frame_height: Option<u16>,
}

impl EmbedHost {
    /// A host that has not yet mounted or heard from its content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Height to present the frame at. `None` until the first report:
    /// an unreported frame is not presented at all.
    #[inline]
    #[must_use]
    pub fn frame_height(&self) -> Option<u16> {
        self.frame_height
    }

    /// Last-recorded width of the hosting pane.
    #[inline]
    #[must_use]
    pub fn container_width(&self) -> Option<u16> {
        self.container_width
    }

    /// Record the hosting pane's width. A changed width returns a
    /// `ResizeRequest` to forward to the content; an unchanged report
    /// returns nothing.
    pub fn set_container_width(&mut self, width: u16) -> Option<EmbedMessage> {
        if self.container_width == Some(width) {
            return None;
        }
        self.container_width = Some(width);
        trace!(width, "host width changed, requesting re-measure");
        Some(EmbedMessage::ResizeRequest)
    }

    /// Handle a message from the content, applying height reports.
    pub fn handle(&mut self, message: &EmbedMessage) {
        if let EmbedMessage::HeightReport { height } = message {
            self.frame_height = Some(*height);
        }
    }
}
