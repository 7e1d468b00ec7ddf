pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;

pub use errors::{json_error_response, ResultResp};

pub use html::{html_response, html_response_with_status};
pub use json::json_response;
pub use redirect::{see_other, see_other_with_cookie};
