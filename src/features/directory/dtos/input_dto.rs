use crate::core::request::{FileUpload, MultipartPayload, RequestBody};
use crate::features::directory::models::EntityId;

/// Category form submission
#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
    pub image: Option<FileUpload>,
}

/// Service form submission
#[derive(Debug, Clone)]
pub struct ServiceInput {
    pub name: String,
    pub category_id: EntityId,
    pub image: Option<FileUpload>,
}

/// One service a worker offers, with the worker's own description of it
#[derive(Debug, Clone)]
pub struct WorkerServiceInput {
    pub service_id: String,
    pub details: String,
}

/// Worker (provider) form submission
#[derive(Debug, Clone)]
pub struct WorkerInput {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub image: Option<FileUpload>,
    pub services: Vec<WorkerServiceInput>,
}

/// Offer (ad) form submission
#[derive(Debug, Clone)]
pub struct OfferInput {
    pub name: String,
    pub details: String,
    pub category_id: EntityId,
    pub start_date: String,
    pub end_date: String,
    pub image: Option<FileUpload>,
}

fn with_image(payload: MultipartPayload, image: Option<FileUpload>) -> MultipartPayload {
    match image {
        Some(upload) => payload.file("image", upload),
        None => payload,
    }
}

impl From<CategoryInput> for MultipartPayload {
    fn from(input: CategoryInput) -> Self {
        let payload = MultipartPayload::new()
            .text("name", input.name)
            .text("description", input.description);
        with_image(payload, input.image)
    }
}

impl From<ServiceInput> for MultipartPayload {
    fn from(input: ServiceInput) -> Self {
        let payload = MultipartPayload::new()
            .text("name", input.name)
            .text("category_id", input.category_id.to_string());
        with_image(payload, input.image)
    }
}

impl From<WorkerInput> for MultipartPayload {
    fn from(input: WorkerInput) -> Self {
        let payload = MultipartPayload::new()
            .text("name", input.name)
            .text("phone", input.phone)
            .text("address", input.address);
        let payload = with_image(payload, input.image);

        // services[] and services_details[] stay index-aligned
        input
            .services
            .into_iter()
            .filter(|s| !s.service_id.trim().is_empty())
            .fold(payload, |payload, s| {
                payload
                    .text("services[]", s.service_id)
                    .text("services_details[]", s.details)
            })
    }
}

impl From<OfferInput> for MultipartPayload {
    fn from(input: OfferInput) -> Self {
        let payload = MultipartPayload::new()
            .text("name", input.name)
            .text("details", input.details)
            .text("category_id", input.category_id.to_string())
            .text("start_date", input.start_date)
            .text("end_date", input.end_date);
        with_image(payload, input.image)
    }
}

macro_rules! impl_into_request_body {
    ($($input:ty),*) => {
        $(
            impl From<$input> for RequestBody {
                fn from(input: $input) -> Self {
                    RequestBody::Multipart(input.into())
                }
            }
        )*
    };
}

impl_into_request_body!(CategoryInput, ServiceInput, WorkerInput, OfferInput);
