//! High-level TR-064 API for FRITZ!Box control
//!
//! This crate provides typed actions for a handful of TR-064 services on top
//! of the `soap-client` crate, which does the SOAP transport and turns UPnP
//! faults into typed errors.
//!
//! # Handling device faults
//!
//! ```rust,no_run
//! use fritz_api::{ApiError, FritzClient, ClientConfig, ErrorCategory};
//! use fritz_api::operations::hosts::{GetSpecificHostEntryOperation, GetSpecificHostEntryRequest};
//!
//! let client = FritzClient::new(ClientConfig::new("192.168.178.1"));
//! let request = GetSpecificHostEntryRequest { mac_address: "AA:BB:CC:DD:EE:FF".to_string() };
//!
//! match client.execute::<GetSpecificHostEntryOperation>(&request) {
//!     Ok(host) => println!("{} is at {}", host.host_name, host.ip_address),
//!     Err(ApiError::Action(err)) if err.is(ErrorCategory::Lookup) => println!("unknown host"),
//!     Err(err) => return Err(err),
//! }
//! # Ok::<(), ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod operation;
pub mod operations;
pub mod service;

pub use client::FritzClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use operation::FritzAction;
pub use service::{Service, ServiceInfo};

pub use soap_client::{
    coerce, ActionError, ActionErrorKind, ActionResponse, Coercion, ErrorCategory, Value,
};
