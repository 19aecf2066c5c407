//! Cookie-carried session: model, signed codec, and the middleware that
//! decodes it on the way in and writes it back on the way out.

pub mod codec;
pub mod middleware;
pub mod model;

pub use codec::{CodecError, SessionCodec};
pub use middleware::session_layer;
pub use model::{Role, Session, SessionChange, SessionUser};
