pub(crate) mod blocking_transport;
