use soap_client::{ActionResponse, SoapClient};

use crate::config::ClientConfig;
use crate::operations::wan_ip_connection::{ForceTerminationOperation, ForceTerminationRequest};
use crate::{FritzAction, Result, Service};

/// A client for invoking TR-064 actions on one device
///
/// Every call goes through the SOAP client, which translates device faults
/// into [`soap_client::ActionError`]s before any response is decoded.
///
/// ```rust,no_run
/// use fritz_api::{ClientConfig, FritzClient};
/// use fritz_api::operations::device_info::{GetDeviceInfoOperation, GetDeviceInfoRequest};
///
/// let client = FritzClient::new(ClientConfig::new("192.168.178.1"));
/// let info = client.execute::<GetDeviceInfoOperation>(&GetDeviceInfoRequest)?;
/// println!("{} {}", info.model_name, info.software_version);
/// # Ok::<(), fritz_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FritzClient {
    soap_client: SoapClient,
    config: ClientConfig,
}

impl FritzClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            soap_client: SoapClient::with_timeouts(config.connect_timeout, config.read_timeout),
            config,
        }
    }

    /// Create a client from `FRITZ_IP_ADDRESS` / `FRITZ_TCP_PORT`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a typed action against the device
    pub fn execute<Op: FritzAction>(&self, request: &Op::Request) -> Result<Op::Response> {
        let arguments = Op::arguments(request);
        let arguments: Vec<(&str, &str)> = arguments
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();

        let response = self.call_action(Op::SERVICE, Op::ACTION, &arguments)?;
        Op::parse_response(&response)
    }

    /// Invoke any action of a known service by name
    ///
    /// Output arguments are returned raw; use [`ActionResponse::values`] for
    /// the boolean-coerced view.
    pub fn call_action(
        &self,
        service: Service,
        action: &str,
        arguments: &[(&str, &str)],
    ) -> Result<ActionResponse> {
        let info = service.info();
        let url = self.config.control_url(info.control_url);

        tracing::debug!(service = service.name(), action, "calling action");

        let response = self
            .soap_client
            .call(&url, info.service_type, action, arguments)?;
        Ok(response)
    }

    /// Terminate the internet connection so the router reconnects
    pub fn reconnect(&self) -> Result<()> {
        tracing::info!(address = %self.config.address, "forcing reconnect");
        self.execute::<ForceTerminationOperation>(&ForceTerminationRequest)
    }
}

impl Default for FritzClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
