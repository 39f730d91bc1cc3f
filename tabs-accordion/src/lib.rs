//! Responsive tabs that collapse into an accordion on narrow viewports.
//!
//! [`TabsToAccordion`] takes over a container in a [`tabdom::Document`],
//! keeps the ARIA state of its titles, panels and nav links consistent, and
//! reacts to clicks, key presses and viewport resizes. The state machine
//! itself lives in [`Disclosure`] and only talks to a [`ViewSink`].

pub mod config;
pub mod controller;
pub mod disclosure;
pub mod error;
pub mod keyboard;
pub mod sink;
pub mod throttle;

pub use config::TabsConfig;
pub use controller::{TabDescriptor, TabsToAccordion, INIT_CLASS, NAV_INIT_CLASS};
pub use disclosure::{CurrentTab, Disclosure, DisclosureState, TabIds};
pub use error::{LookupFailure, TabsError};
pub use sink::{RecordingSink, SinkCall, ViewSink};
pub use throttle::FrameThrottle;
