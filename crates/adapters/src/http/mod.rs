use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use restyle_application::{ApplicationError, ImageProcessor};
use restyle_domain::ProcessRequest;

/// Blocking multipart client for the processing service. One POST per
/// submission; the driver keeps it on a worker thread.
pub struct HttpImageProcessor {
    endpoint: String,
    client: Client,
}

impl HttpImageProcessor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(request: &ProcessRequest) -> Form {
        let mut form = Form::new()
            .text("prompt", request.prompt.clone())
            .text("theme", request.theme.key())
            .text("option", request.operation.key());

        // The file part is omitted entirely when nothing is selected.
        if let Some(source) = &request.source {
            let part = Part::bytes(source.bytes.clone()).file_name(source.file_name.clone());
            form = form.part("file", part);
        }

        form
    }
}

impl ImageProcessor for HttpImageProcessor {
    fn process(&self, request: &ProcessRequest) -> Result<Vec<u8>, ApplicationError> {
        request.validate()?;

        log::debug!(
            "posting {} request to {}",
            request.operation.key(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(Self::build_form(request))
            .send()
            .map_err(|error| ApplicationError::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .map_err(|error| ApplicationError::Network(error.to_string()))?;
        Ok(bytes.to_vec())
    }
}
