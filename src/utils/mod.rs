mod endian;

pub(crate) use endian::*;
