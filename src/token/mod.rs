mod decode;
mod encode;
mod header;
mod parsed;

pub use decode::{dangerous_decode_unverified, decode, DecodedToken};
pub use encode::{encode, encode_with_header};
pub use header::TokenHeader;
pub use parsed::ParsedToken;
