use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer as exchanged over the API.
///
/// Used both as the customer of an order (only `email` is significant) and as the
/// filter of the customer search, where every unset field is unconstrained.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[schema(example = "Leon", max_length = 250)]
    pub first_name: Option<String>,
    #[schema(example = "Kennedy", max_length = 250)]
    pub last_name: Option<String>,
    #[schema(example = "+1 7035555015", max_length = 250)]
    pub telephone: Option<String>,
    #[schema(example = "leon.kennedy@rpd.com", max_length = 250)]
    pub email: Option<String>,
}
