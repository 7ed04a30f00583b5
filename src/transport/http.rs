//! `HttpTransport` over reqwest.

use crate::transport::traits::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

const APPLICATION_JSON: &str = "application/json";

#[async_trait]
impl HttpTransport for Client {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.request(request.method.into(), &request.url);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
