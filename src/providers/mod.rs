pub mod hetzner;
