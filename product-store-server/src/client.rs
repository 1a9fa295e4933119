use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use product_store_api::api::NameRequest;
use reqwest::{StatusCode, Url};

/// Client re-issuing requests against the server's own product routes.
///
/// Only the status code of a forwarded call is reported back, there are no
/// retries and no timeouts beyond what `reqwest` does by default.
#[derive(Debug, Clone)]
pub struct SelfClient {
    http: reqwest::Client,
    base: Url,
}

impl SelfClient {
    pub fn new(mut base: Url) -> Self {
        // `Url::join` replaces the last segment unless the path ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Client for a server listening on `addr`.
    ///
    /// An unspecified address (`0.0.0.0` or `::`) is reached through loopback.
    pub fn for_local_addr(addr: SocketAddr) -> Result<Self, url::ParseError> {
        let ip = match addr.ip() {
            IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
            ip => ip,
        };
        let base = Url::parse(&format!("http://{}/", SocketAddr::new(ip, addr.port())))?;
        Ok(Self::new(base))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn product_url(&self, index: usize) -> Result<Url, url::ParseError> {
        self.base.join(&index.to_string())
    }

    /// `POST /` with the given product name.
    pub async fn create(&self, product: Option<&str>) -> Result<StatusCode, ForwardError> {
        let body = NameRequest {
            name: product.map(String::from),
        };
        let response = self.http.post(self.base.clone()).json(&body).send().await?;
        Ok(response.status())
    }

    /// `PUT /{index}` with the given product name.
    pub async fn update(
        &self,
        index: usize,
        product: Option<&str>,
    ) -> Result<StatusCode, ForwardError> {
        let body = NameRequest {
            name: product.map(String::from),
        };
        let response = self
            .http
            .put(self.product_url(index)?)
            .json(&body)
            .send()
            .await?;
        Ok(response.status())
    }

    /// `DELETE /{index}`.
    pub async fn delete(&self, index: usize) -> Result<StatusCode, ForwardError> {
        let response = self.http.delete(self.product_url(index)?).send().await?;
        Ok(response.status())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("invalid target url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_address_uses_loopback() {
        let client = SelfClient::for_local_addr("0.0.0.0:5000".parse().unwrap()).unwrap();
        assert_eq!(client.base().as_str(), "http://127.0.0.1:5000/");

        let client = SelfClient::for_local_addr("[::]:5000".parse().unwrap()).unwrap();
        assert_eq!(client.base().as_str(), "http://[::1]:5000/");

        let client = SelfClient::for_local_addr("10.0.0.7:80".parse().unwrap()).unwrap();
        assert_eq!(client.base().as_str(), "http://10.0.0.7/");
    }

    #[test]
    fn product_urls_keep_base_path() {
        let client = SelfClient::new(Url::parse("http://localhost:5000/shop").unwrap());
        assert_eq!(client.base().as_str(), "http://localhost:5000/shop/");
        assert_eq!(
            client.product_url(3).unwrap().as_str(),
            "http://localhost:5000/shop/3"
        );
    }
}
