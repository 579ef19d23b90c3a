//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use farepath_lib::NewRoute;

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

fn require(value: &str, field: &str, request_id: &str) -> Result<(), Box<ProblemDetails>> {
    if value.trim().is_empty() {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{}' field is required and cannot be empty", field),
            request_id,
        )));
    }
    Ok(())
}

/// Query for the cheapest route between two location codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRouteRequest {
    pub origin: String,
    pub destination: String,
}

impl Validate for SearchRouteRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require(&self.origin, "origin", request_id)?;
        require(&self.destination, "destination", request_id)
    }
}

/// Body for creating a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRouteRequest {
    pub origin: String,
    pub destination: String,
    pub cost: i64,
}

/// Body for replacing a catalog entry; the id comes from the path.
pub type UpdateRouteRequest = CreateRouteRequest;

impl CreateRouteRequest {
    pub fn to_new_route(&self) -> NewRoute {
        NewRoute::new(self.origin.trim(), self.destination.trim(), self.cost)
    }
}

impl Validate for CreateRouteRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require(&self.origin, "origin", request_id)?;
        require(&self.destination, "destination", request_id)?;

        if self.cost <= 0 {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'cost' field must be greater than zero",
                request_id,
            )));
        }

        Ok(())
    }
}
