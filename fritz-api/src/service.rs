use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// TR-064 services supported by this crate
///
/// Names carry the instance suffix the device uses in its service list,
/// e.g. `WLANConfiguration1` for the first WLAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// DeviceInfo - model, firmware and uptime
    DeviceInfo,

    /// Hosts - devices known to the router
    Hosts,

    /// WANIPConnection - internet connection state and reconnect
    WANIPConnection,

    /// WLANConfiguration - first wireless network
    WLANConfiguration,
}

/// Control endpoint and service type of a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// The HTTP control path (relative to the device base URL)
    pub control_url: &'static str,

    /// The service type URN, used as the action namespace
    pub service_type: &'static str,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::DeviceInfo,
        Service::Hosts,
        Service::WANIPConnection,
        Service::WLANConfiguration,
    ];

    /// Service name as listed by the device
    pub fn name(&self) -> &'static str {
        match self {
            Service::DeviceInfo => "DeviceInfo1",
            Service::Hosts => "Hosts1",
            Service::WANIPConnection => "WANIPConnection1",
            Service::WLANConfiguration => "WLANConfiguration1",
        }
    }

    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::DeviceInfo => ServiceInfo {
                control_url: "/upnp/control/deviceinfo",
                service_type: "urn:dslforum-org:service:DeviceInfo:1",
            },
            Service::Hosts => ServiceInfo {
                control_url: "/upnp/control/hosts",
                service_type: "urn:dslforum-org:service:Hosts:1",
            },
            Service::WANIPConnection => ServiceInfo {
                control_url: "/upnp/control/wanipconnection1",
                service_type: "urn:dslforum-org:service:WANIPConnection:1",
            },
            Service::WLANConfiguration => ServiceInfo {
                control_url: "/upnp/control/wlanconfig1",
                service_type: "urn:dslforum-org:service:WLANConfiguration:1",
            },
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Service {
    type Err = ApiError;

    /// Accepts the suffixed name (`Hosts1`) or the bare one (`Hosts`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| s == service.name() || s == service.name().trim_end_matches('1'))
            .ok_or_else(|| ApiError::InvalidParameter(format!("Unknown service: {}", s)))
    }
}
