mod compression;
mod fingerprint;
mod key_id;
mod key_traits;
mod mpi;
mod packet;
mod revocation_key;

pub use compression::*;
pub use fingerprint::*;
pub use key_id::*;
pub use key_traits::*;
pub use mpi::*;
pub use packet::*;
pub use revocation_key::*;
