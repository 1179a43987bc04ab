use reqwest::{
    Client, Request,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

use crate::config::DeviceConfig;

pub mod report;

use report::StateReport;

const STATE_PATH: &str = "/rest/state";
const SET_TEMP_PATH: &str = "/rest/state/set_temp";
const VERSION_PATH: &str = "/rest/version";
const REBOOT_PATH: &str = "/reboot";
const SHUTDOWN_PATH: &str = "/shutdown";

/// REST client for the sous-vide controller.
///
/// Wraps a single HTTP client configured once so that every outbound
/// request carries a JSON content type and payloads are serialized to a
/// JSON string body before the transport sees them. Cheap to clone.
#[derive(Clone)]
pub struct Device {
    base: String,
    http: Client,
}

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct SetTempBody<'a> {
    value: &'a str,
}

impl Device {
    pub fn connect_from_config(config: &DeviceConfig) -> Result<Self, DeviceError> {
        Self::new(&config.host, config.port)
    }

    pub fn new(host: &str, port: u16) -> Result<Self, DeviceError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Device {
            base: format!("http://{host}:{port}"),
            http,
        })
    }

    /* == Reads == */

    pub async fn state(&self) -> Result<StateReport, DeviceError> {
        self.fetch_json(STATE_PATH).await
    }

    /// Returns the firmware version, a bare JSON scalar rendered verbatim.
    pub async fn version(&self) -> Result<String, DeviceError> {
        let value: Value = self.fetch_json(VERSION_PATH).await?;

        Ok(match value {
            Value::String(version) => version,
            other => other.to_string(),
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DeviceError> {
        let response = self.http.get(self.endpoint(path)).send().await?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /* == Writes == */

    /// Forwards `value` as the new target temperature, verbatim. The
    /// firmware owns validation; anything entered goes out as-is.
    pub async fn set_temp(&self, value: &str) -> Result<(), DeviceError> {
        self.http.execute(self.set_temp_request(value)?).await?;
        Ok(())
    }

    pub async fn reboot(&self) -> Result<(), DeviceError> {
        self.http.execute(self.command_request(REBOOT_PATH)?).await?;
        Ok(())
    }

    pub async fn shutdown(&self) -> Result<(), DeviceError> {
        self.http.execute(self.command_request(SHUTDOWN_PATH)?).await?;
        Ok(())
    }

    /* == Requests == */

    fn set_temp_request(&self, value: &str) -> Result<Request, DeviceError> {
        let body = serde_json::to_vec(&SetTempBody { value })?;

        Ok(self
            .http
            .put(self.endpoint(SET_TEMP_PATH))
            .body(body)
            .build()?)
    }

    fn command_request(&self, path: &str) -> Result<Request, DeviceError> {
        Ok(self.http.put(self.endpoint(path)).build()?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}
