//! One module per request the driver sends, each pairing the verbatim request with a
//! view over its response.

pub(crate) mod data_message;
pub(crate) mod info_message;
pub(crate) mod model_message;
pub(crate) mod test_mode_message;
