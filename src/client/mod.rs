//! The non-visual half of the browser extension: backend calls, the
//! background relay contract, the page badge and popup panel state.

pub mod api;
pub mod background;
pub mod badge;
pub mod popup;

pub use api::{ClientError, DEFAULT_BACKEND_URL, WebTrustClient};
pub use background::{Background, BackgroundMessage, BackgroundReply};
pub use badge::{Badge, RiskBand};
pub use popup::{ChatEntry, ChatTranscript, PanelState, Popup, Sender};
