mod bytes;
mod io;

#[cfg(feature = "serde_types")]
mod serde_types;
