//! HTTP request execution: transports, pacing, and the virtual-user loop.
mod outcome;
mod rate;
mod transport;
mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use outcome::{RequestOutcome, is_success_status};
pub use rate::RateLimiter;
pub use transport::{
    ClientSettings, ReqwestTransport, ReqwestTransportFactory, Transport, TransportFactory,
};
pub(crate) use worker::VirtualUser;
