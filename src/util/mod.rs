pub(crate) mod date;
pub(crate) mod encode;
pub(crate) mod redact;
pub(crate) mod text;
pub(crate) mod xml;
