pub mod ttl;
